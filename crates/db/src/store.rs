//! [`RoleStore`] implementation over a PostgreSQL pool.

use async_trait::async_trait;
use roster_core::role::{NewRole, Role};
use roster_core::store::{RoleStore, StoreError};
use roster_core::types::DbId;

use crate::repositories::RoleRepo;
use crate::DbPool;

/// Role store backed by the `roles` table.
#[derive(Debug, Clone)]
pub struct PgRoleStore {
    pool: DbPool,
}

impl PgRoleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map a sqlx error into the opaque store error.
fn store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(err.to_string())
        }
        other => StoreError::backend(other),
    }
}

#[async_trait]
impl RoleStore for PgRoleStore {
    async fn insert(&self, role: &NewRole) -> Result<Role, StoreError> {
        let row = RoleRepo::create(&self.pool, &role.name, role.is_active)
            .await
            .map_err(store_error)?;
        tracing::debug!(role_id = row.id, "Inserted role");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Role>, StoreError> {
        let row = RoleRepo::find_by_id(&self.pool, id)
            .await
            .map_err(store_error)?;
        Ok(row.map(Role::from))
    }

    async fn list_active(&self) -> Result<Vec<Role>, StoreError> {
        let rows = RoleRepo::list_active(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn find_name_conflict(
        &self,
        name: &str,
        exclude_id: DbId,
    ) -> Result<Option<Role>, StoreError> {
        let row = RoleRepo::find_by_name_excluding(&self.pool, name, exclude_id)
            .await
            .map_err(store_error)?;
        Ok(row.map(Role::from))
    }

    async fn save(&self, role: &Role) -> Result<Option<Role>, StoreError> {
        let row = RoleRepo::update(&self.pool, role.id, &role.name, role.is_active)
            .await
            .map_err(store_error)?;
        tracing::debug!(role_id = role.id, found = row.is_some(), "Saved role");
        Ok(row.map(Role::from))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }
}
