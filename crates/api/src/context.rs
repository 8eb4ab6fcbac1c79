use loadsim_auth::Identity;

/// Caller context for a request (the identity resolved from its credential).
///
/// Inserted by the auth middleware; present for every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    identity: Identity,
}

impl CallerContext {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Value echoed back as `id` in data responses.
    pub fn id(&self) -> String {
        self.identity.as_str().to_string()
    }
}
