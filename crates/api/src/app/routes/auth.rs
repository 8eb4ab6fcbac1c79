use std::sync::Arc;

use axum::{Json, extract::Extension};

use loadsim_auth::{Identity, TokenCodec};

use crate::app::dto::TokenResponse;
use crate::app::errors::ApiError;
use crate::context::CallerContext;

/// Mint a credential for a brand-new identity. No input is checked.
pub async fn issue_token(
    Extension(codec): Extension<Arc<TokenCodec>>,
) -> Result<Json<TokenResponse>, ApiError> {
    let identity = Identity::generate();
    let access_token = codec
        .issue(&identity)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(%identity, "issued access token");
    Ok(Json(TokenResponse { access_token }))
}

pub async fn me(Extension(caller): Extension<CallerContext>) -> Json<Identity> {
    Json(caller.identity().clone())
}
