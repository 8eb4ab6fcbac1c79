use rand::Rng;
use serde::Serialize;

/// Length of a generated caller identifier.
pub const IDENTITY_LEN: usize = 8;

/// Caller identity carried inside a credential.
///
/// Generated fresh for every `/auth` call and never stored server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Identity {
    id_user: String,
}

impl Identity {
    /// New random identity of [`IDENTITY_LEN`] uppercase ASCII letters.
    pub fn generate() -> Self {
        Self {
            id_user: random_code(IDENTITY_LEN),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id_user
    }

    /// Rebuild an identity from the code carried in a credential's `sub` claim.
    pub(crate) fn from_code(code: impl Into<String>) -> Self {
        Self {
            id_user: code.into(),
        }
    }
}

impl core::fmt::Display for Identity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.id_user)
    }
}

/// Random string of `len` uppercase ASCII letters.
pub fn random_code(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| char::from(rng.gen_range(b'A'..=b'Z'))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_identity_is_eight_uppercase_letters() {
        for _ in 0..100 {
            let id = Identity::generate();
            assert_eq!(id.as_str().len(), IDENTITY_LEN);
            assert!(id.as_str().chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn serializes_as_id_user_object() {
        let id = Identity::from_code("ABCDEFGH");
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::json!({ "id_user": "ABCDEFGH" }));
    }
}
