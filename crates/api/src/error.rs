use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::RoleError;

use crate::response::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`RoleError`] for domain failures and adds request-shape rejections.
/// Implements [`IntoResponse`] so failures render as the same envelope as
/// successes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure reported by the role manager.
    #[error(transparent)]
    Role(#[from] RoleError),

    /// The request body or path did not have the expected shape.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The envelope this error renders as.
    pub fn to_envelope(&self) -> Envelope {
        match self {
            AppError::Role(err) => Envelope::failure(err.status(), err.to_string()),
            AppError::BadRequest(msg) => {
                Envelope::failure(StatusCode::BAD_REQUEST.as_u16(), msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Role(RoleError::Storage { op, source }) = &self {
            tracing::error!(operation = %op, error = %source, "Role store failure");
        }
        self.to_envelope().into_response()
    }
}
