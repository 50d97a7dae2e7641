//! Response envelope shared by all role endpoints.
//!
//! Every role response, success or failure, is rendered as
//! `{ "ok": bool, "message"?: string, "status": number, "roles"?: [...], "rol"?: {...} }`
//! and the HTTP status code mirrors the `status` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::role::Role;
use serde::Serialize;

/// Uniform `{ok, message, status, ...}` envelope.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: u16,
    /// Payload of the list endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
    /// Payload of the single-role endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol: Option<Role>,
}

impl Envelope {
    /// Successful outcome carrying only a confirmation message.
    pub fn confirm(status: StatusCode, message: &str) -> Self {
        Self {
            ok: true,
            message: Some(message.to_string()),
            status: status.as_u16(),
            roles: None,
            rol: None,
        }
    }

    /// Attach a single role to the envelope.
    pub fn with_role(mut self, role: Role) -> Self {
        self.rol = Some(role);
        self
    }

    /// `200` with the list of roles.
    pub fn roles(roles: Vec<Role>) -> Self {
        Self {
            ok: true,
            message: None,
            status: StatusCode::OK.as_u16(),
            roles: Some(roles),
            rol: None,
        }
    }

    /// `200` with a single role.
    pub fn role(role: Role) -> Self {
        Self {
            ok: true,
            message: None,
            status: StatusCode::OK.as_u16(),
            roles: None,
            rol: Some(role),
        }
    }

    /// Failed outcome.
    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            status,
            roles: None,
            rol: None,
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
