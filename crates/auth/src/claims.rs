use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Identity;

/// Claims carried by an issued credential.
///
/// `sub` is the identity code as a plain string (JWT subjects are strings);
/// timestamps are Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Caller identity code. Absent in the payload means empty.
    #[serde(default)]
    pub sub: String,

    /// Issued-at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(identity: &Identity, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: identity.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::from_code(self.sub.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,

    #[error("token carries no identity")]
    MissingIdentity,
}

/// Validate decoded claims against `now`.
///
/// Signature verification happens before this, in [`crate::TokenCodec`].
pub fn validate_claims(claims: &TokenClaims, now: DateTime<Utc>) -> Result<(), ClaimsError> {
    if claims.exp <= claims.iat {
        return Err(ClaimsError::InvalidTimeWindow);
    }
    if now.timestamp() >= claims.exp {
        return Err(ClaimsError::Expired);
    }
    if claims.sub.is_empty() {
        return Err(ClaimsError::MissingIdentity);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_at(now: DateTime<Utc>) -> TokenClaims {
        TokenClaims::new(&Identity::from_code("QWERTYUI"), now, Duration::minutes(60))
    }

    #[test]
    fn fresh_claims_are_valid() {
        let now = Utc::now();
        assert_eq!(validate_claims(&claims_at(now), now), Ok(()));
    }

    #[test]
    fn expiry_is_sixty_minutes_after_issue() {
        let now = Utc::now();
        let claims = claims_at(now);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(claims.exp, (now + Duration::minutes(60)).timestamp());
    }

    #[test]
    fn claims_at_or_after_expiry_are_rejected() {
        let now = Utc::now();
        let claims = claims_at(now);
        let exp = DateTime::from_timestamp(claims.exp, 0).unwrap();

        assert_eq!(validate_claims(&claims, exp - Duration::seconds(1)), Ok(()));
        assert_eq!(validate_claims(&claims, exp), Err(ClaimsError::Expired));
        assert_eq!(
            validate_claims(&claims, exp + Duration::hours(5)),
            Err(ClaimsError::Expired)
        );
    }

    #[test]
    fn subject_is_serialized_as_a_plain_string() {
        let claims = claims_at(Utc::now());
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["sub"], serde_json::json!("QWERTYUI"));

        let back: TokenClaims = serde_json::from_value(json).unwrap();
        assert_eq!(back.identity(), Identity::from_code("QWERTYUI"));
    }

    #[test]
    fn empty_identity_is_rejected() {
        let now = Utc::now();
        let claims = TokenClaims::new(&Identity::default(), now, Duration::minutes(60));
        assert_eq!(validate_claims(&claims, now), Err(ClaimsError::MissingIdentity));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let now = Utc::now();
        let claims = TokenClaims::new(&Identity::from_code("QWERTYUI"), now, Duration::minutes(-1));
        assert_eq!(validate_claims(&claims, now), Err(ClaimsError::InvalidTimeWindow));
    }
}
