//! Role entity and its input DTOs.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// A persisted role.
///
/// `is_active` is the soft-delete flag: removed roles stay addressable by id
/// but are hidden from listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A role that has been built in memory but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub name: String,
    pub is_active: bool,
}

impl From<&CreateRole> for NewRole {
    fn from(input: &CreateRole) -> Self {
        Self {
            name: input.name.clone(),
            is_active: input.is_active.unwrap_or(true),
        }
    }
}

/// DTO for creating a role.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRole {
    pub name: String,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating a role. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRole {
    pub name: Option<String>,
    /// Accepted for compatibility with existing clients; `update` never
    /// changes the flag.
    pub is_active: Option<bool>,
}
