use axum::{Router, routing::get};

pub mod auth;
pub mod data;
pub mod sample;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/me", get(auth::me))
        .route("/data", get(data::get_all))
        .route(
            "/data/:kind",
            get(data::get_kind)
                .post(data::create)
                .put(data::replace)
                .delete(data::remove),
        )
}
