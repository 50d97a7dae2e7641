//! Request extractors that reject malformed input with the role envelope.
//!
//! Axum's built-in `Path` and `Json` rejections answer with plain text and,
//! for bodies, a 422. These wrappers turn any shape error into a 400
//! [`AppError::BadRequest`] so clients always receive `{ok, message, status}`.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use roster_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::state::AppState;

/// Role id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct RoleId(pub DbId);

impl FromRequestParts<AppState> for RoleId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(RoleId(id))
    }
}

/// JSON request body.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> FromRequest<AppState> for JsonBody<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}
