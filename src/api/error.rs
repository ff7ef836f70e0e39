use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures during upload handling. Every variant collapses to a bare
/// 500 on the wire; the detail is only logged server-side.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("multipart parse error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Multipart(e) => {
                tracing::error!("Multipart parse failed: {:?}", e);
            }
            AppError::Storage(e) => {
                tracing::error!("Storage operation failed: {:?}", e);
            }
        }

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
