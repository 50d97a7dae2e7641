//! Storage port for roles.
//!
//! The manager never talks to a database directly; adapters (the PostgreSQL
//! store in `roster-db`, [`crate::memory::MemoryRoleStore`]) implement
//! [`RoleStore`] and are injected at construction time.

use async_trait::async_trait;

use crate::role::{NewRole, Role};
use crate::types::DbId;

/// Errors raised by a [`RoleStore`] implementation.
///
/// Callers do not branch on the cause; every variant is an internal failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Any other failure reported by the backing store.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap an arbitrary backend error.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

/// Persistence operations the role manager needs.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Persist a new role, returning it with its assigned id and timestamps.
    async fn insert(&self, role: &NewRole) -> Result<Role, StoreError>;

    /// Find a role by id regardless of its active flag.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Role>, StoreError>;

    /// List active roles ordered by id ascending.
    async fn list_active(&self) -> Result<Vec<Role>, StoreError>;

    /// Find a role (active or not) named exactly `name` whose id is not `exclude_id`.
    async fn find_name_conflict(
        &self,
        name: &str,
        exclude_id: DbId,
    ) -> Result<Option<Role>, StoreError>;

    /// Write `name` and `is_active` back for `role.id`.
    ///
    /// Returns `None` if no row with that id exists.
    async fn save(&self, role: &Role) -> Result<Option<Role>, StoreError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
