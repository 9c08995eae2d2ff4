use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request-level failures. Per-pair comparison failures are never errors at
/// this layer; they travel inside the 200 response as failure outcomes.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request cannot produce a batch (too few files, bad weight).
    #[error("{0}")]
    InvalidRequest(String),

    /// The multipart body could not be read.
    #[error("malformed multipart request: {0}")]
    Multipart(#[from] MultipartError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
