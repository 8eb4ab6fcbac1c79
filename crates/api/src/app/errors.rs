use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use loadsim_auth::AuthError;
use loadsim_core::{Kind, StoreError};

/// Every error a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Not found")]
    NotFound,

    /// Unknown collection kind in the path.
    #[error("{0}")]
    InvalidKind(String),

    /// Query string or JSON body failed to parse.
    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidKind(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated => ApiError::Unauthenticated,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::UnknownKind(name) => ApiError::InvalidKind(unknown_kind_detail(&name)),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(msg) = &self {
            tracing::error!("request failed: {msg}");
        }
        json_error(self.status(), self.to_string())
    }
}

pub fn json_error(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "detail": detail.into() }))).into_response()
}

/// Parse the `{kind}` path segment, rejecting anything outside the closed set.
pub fn parse_kind(s: &str) -> Result<Kind, ApiError> {
    s.parse::<Kind>().map_err(ApiError::from)
}

fn unknown_kind_detail(name: &str) -> String {
    let expected = Kind::ALL
        .iter()
        .map(|k| format!("'{k}'"))
        .collect::<Vec<_>>()
        .join(" or ");
    format!("kind must be one of: {expected} (got '{name}')")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(StoreError::NotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(StoreError::unknown_kind("x")).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn parse_kind_names_the_allowed_values() {
        assert_eq!(parse_kind("users").unwrap(), Kind::Users);
        let err = parse_kind("invalidkind").unwrap_err();
        assert_eq!(
            err.to_string(),
            "kind must be one of: 'users' or 'posts' (got 'invalidkind')"
        );
    }
}
