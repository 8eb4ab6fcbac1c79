//! Caller identity resolution from a presented credential.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{Identity, TokenCodec};

/// Outward-facing authentication failure.
///
/// Deliberately carries no cause: expired, forged and malformed credentials
/// are indistinguishable to the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Not authenticated")]
    Unauthenticated,
}

/// Turns a raw `Authorization` header value into an [`Identity`].
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, raw: Option<&str>, now: DateTime<Utc>) -> Result<Identity, AuthError>;
}

impl IdentityResolver for TokenCodec {
    fn resolve(&self, raw: Option<&str>, now: DateTime<Utc>) -> Result<Identity, AuthError> {
        // The header value is the token itself, without a `Bearer ` scheme.
        let token = raw.map(str::trim).unwrap_or_default();
        if token.is_empty() {
            tracing::debug!("rejected request without credential");
            return Err(AuthError::Unauthenticated);
        }

        self.decode_at(token, now).map_err(|e| {
            tracing::debug!(reason = %e, "rejected credential");
            AuthError::Unauthenticated
        })
    }
}
