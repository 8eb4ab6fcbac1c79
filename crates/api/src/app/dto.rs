use serde::{Deserialize, Serialize};

// -------------------------
// Request DTOs
// -------------------------

/// `?value=<int>` for create and delete.
#[derive(Debug, Deserialize)]
pub struct ValueQuery {
    pub value: i64,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceRequest {
    pub old: i64,
    pub new: i64,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Uniform `{ id, data }` envelope for every data endpoint.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub id: String,
    pub data: T,
}
