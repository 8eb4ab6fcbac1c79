use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use loadsim_auth::IdentityResolver;

use crate::app::errors::ApiError;
use crate::context::CallerContext;

#[derive(Clone)]
pub struct AuthState {
    pub resolver: Arc<dyn IdentityResolver>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let raw = raw_credential(req.headers());

    let identity = match state.resolver.resolve(raw, Utc::now()) {
        Ok(identity) => identity,
        Err(e) => return ApiError::from(e).into_response(),
    };

    req.extensions_mut().insert(CallerContext::new(identity));

    next.run(req).await
}

/// The `Authorization` header value, taken verbatim as the token.
fn raw_credential(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}
