//! `/sample`: a throwaway text file served as a download.

use axum::{http::header, response::IntoResponse};

use loadsim_auth::{IDENTITY_LEN, random_code};

use crate::app::errors::ApiError;

pub const SAMPLE_FILE_NAME: &str = "sample.txt";

pub fn sample_text(code: &str) -> String {
    format!("Hello stranger. Your random code it's: {code}")
}

/// Write a fresh sample file into a new temporary directory and read it back.
///
/// The directory is removed when this returns.
pub fn create_sample() -> std::io::Result<Vec<u8>> {
    let dir = tempfile::Builder::new().suffix("sample").tempdir()?;
    let path = dir.path().join(SAMPLE_FILE_NAME);
    std::fs::write(&path, sample_text(&random_code(IDENTITY_LEN)))?;
    std::fs::read(&path)
}

pub async fn sample() -> Result<impl IntoResponse, ApiError> {
    let bytes = tokio::task::spawn_blocking(create_sample)
        .await
        .map_err(|e| ApiError::Internal(format!("sample task failed: {e}")))?
        .map_err(|e| ApiError::Internal(format!("failed to create sample file: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition()),
        ],
        bytes,
    ))
}

fn content_disposition() -> String {
    format!("attachment; filename=\"{SAMPLE_FILE_NAME}\"")
}
