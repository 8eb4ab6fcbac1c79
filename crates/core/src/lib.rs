//! `loadsim-core` — the in-memory collections behind the simulated API.
//!
//! This crate is intentionally decoupled from HTTP and authentication.

pub mod error;
pub mod kind;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use kind::Kind;
pub use store::{CollectionStore, Snapshot};
