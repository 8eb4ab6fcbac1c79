//! `loadsim-auth` — credential issuance and caller identity resolution.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod claims;
pub mod codec;
pub mod identity;
pub mod resolver;

pub use claims::{ClaimsError, TokenClaims, validate_claims};
pub use codec::{DEFAULT_TTL_MINUTES, TokenCodec, TokenError};
pub use identity::{IDENTITY_LEN, Identity, random_code};
pub use resolver::{AuthError, IdentityResolver};
