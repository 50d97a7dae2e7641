//! Handlers for the `/roles` resource.
//!
//! Each handler delegates to [`RoleManager`](roster_core::manager::RoleManager)
//! and renders the outcome as an [`Envelope`]; failures go through
//! [`AppError`](crate::error::AppError) so they share the same shape.

use axum::extract::State;
use axum::http::StatusCode;
use roster_core::role::{CreateRole, UpdateRole};

use crate::error::AppResult;
use crate::extract::{JsonBody, RoleId};
use crate::response::Envelope;
use crate::state::AppState;

/// POST /roles
///
/// The created role is echoed under `rol` so clients learn its id.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateRole>,
) -> AppResult<Envelope> {
    let role = state.roles.create(&input).await?;
    tracing::info!(role_id = role.id, name = %role.name, "Role created");
    Ok(Envelope::confirm(StatusCode::CREATED, "role created").with_role(role))
}

/// GET /roles
pub async fn list(State(state): State<AppState>) -> AppResult<Envelope> {
    let roles = state.roles.find_all().await?;
    Ok(Envelope::roles(roles))
}

/// GET /roles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RoleId(id): RoleId,
) -> AppResult<Envelope> {
    let role = state.roles.find_one(id).await?;
    Ok(Envelope::role(role))
}

/// PATCH /roles/{id}
pub async fn update(
    State(state): State<AppState>,
    RoleId(id): RoleId,
    JsonBody(input): JsonBody<UpdateRole>,
) -> AppResult<Envelope> {
    let role = state.roles.update(id, &input).await?;
    tracing::info!(role_id = role.id, name = %role.name, "Role renamed");
    Ok(Envelope::confirm(StatusCode::OK, "role updated"))
}

/// DELETE /roles/{id}
///
/// Soft delete: the role is deactivated, never removed.
pub async fn delete(State(state): State<AppState>, RoleId(id): RoleId) -> AppResult<Envelope> {
    state.roles.remove(id).await?;
    tracing::info!(role_id = id, "Role deactivated");
    Ok(Envelope::confirm(StatusCode::OK, "role deleted"))
}
