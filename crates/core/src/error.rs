use std::fmt;

use crate::store::StoreError;
use crate::types::DbId;

/// The role operation a storage failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleOp {
    Create,
    FindAll,
    FindOne,
    Update,
    Remove,
}

impl RoleOp {
    /// Client-facing message reported when the store fails during this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            RoleOp::Create => "error saving role",
            RoleOp::FindAll => "error fetching roles",
            RoleOp::FindOne => "error",
            RoleOp::Update => "error updating role",
            RoleOp::Remove => "error deleting role",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoleOp::Create => "create",
            RoleOp::FindAll => "find_all",
            RoleOp::FindOne => "find_one",
            RoleOp::Update => "update",
            RoleOp::Remove => "remove",
        }
    }
}

impl fmt::Display for RoleOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure outcome of a role operation.
///
/// `Display` yields the client-facing message and [`RoleError::status`] the
/// HTTP-style status code reported alongside it.
#[derive(Debug, thiserror::Error)]
pub enum RoleError {
    #[error("role not found")]
    NotFound { id: DbId },

    #[error("name is required")]
    NameRequired,

    #[error("role name already exists")]
    NameTaken { name: String },

    /// Listing found no active roles. Reported as 404 for compatibility
    /// with existing clients.
    #[error("no roles found")]
    NoActiveRoles,

    #[error("{}", .op.failure_message())]
    Storage {
        op: RoleOp,
        #[source]
        source: StoreError,
    },
}

impl RoleError {
    /// HTTP-style status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            RoleError::NotFound { .. } | RoleError::NoActiveRoles => 404,
            RoleError::NameRequired | RoleError::NameTaken { .. } => 400,
            RoleError::Storage { .. } => 500,
        }
    }

    /// Returns a mapper that tags a [`StoreError`] with the failing operation.
    pub(crate) fn storage(op: RoleOp) -> impl FnOnce(StoreError) -> RoleError {
        move |source| RoleError::Storage { op, source }
    }
}
