//! HTTP API application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent `{"detail": ...}` error responses

use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower::ServiceBuilder;

use loadsim_auth::TokenCodec;
use loadsim_core::CollectionStore;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Generates a fresh signing key and a seeded store.
pub fn build_app(config: &ApiConfig) -> Router {
    let codec = Arc::new(TokenCodec::generate(config.token_ttl));
    let store = Arc::new(CollectionStore::seeded());
    build_app_with(codec, store)
}

/// Build the router around an existing codec and store.
pub fn build_app_with(codec: Arc<TokenCodec>, store: Arc<CollectionStore>) -> Router {
    let auth_state = middleware::AuthState {
        resolver: codec.clone(),
    };

    // Protected routes: the credential is resolved before any handler runs.
    let protected = routes::router().route_layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/", get(routes::system::redirect_to_docs))
        .route("/docs", get(routes::system::docs))
        .route("/openapi.json", get(routes::system::openapi))
        .route("/sample", get(routes::sample::sample))
        .route("/auth", post(routes::auth::issue_token))
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(Extension(store))
                .layer(Extension(codec)),
        )
}
