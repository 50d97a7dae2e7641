//! In-process [`RoleStore`] backed by a `BTreeMap`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::role::{NewRole, Role};
use crate::store::{RoleStore, StoreError};
use crate::types::DbId;

#[derive(Debug, Default)]
struct Inner {
    next_id: DbId,
    rows: BTreeMap<DbId, Role>,
}

/// Role store that keeps rows in memory. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryRoleStore {
    inner: RwLock<Inner>,
}

impl MemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn insert(&self, role: &NewRole) -> Result<Role, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let now = chrono::Utc::now();
        let row = Role {
            id: inner.next_id,
            name: role.name.clone(),
            is_active: role.is_active,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Role>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Role>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().filter(|r| r.is_active).cloned().collect())
    }

    async fn find_name_conflict(
        &self,
        name: &str,
        exclude_id: DbId,
    ) -> Result<Option<Role>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .find(|r| r.name == name && r.id != exclude_id)
            .cloned())
    }

    async fn save(&self, role: &Role) -> Result<Option<Role>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&role.id) else {
            return Ok(None);
        };
        row.name = role.name.clone();
        row.is_active = role.is_active;
        row.updated_at = chrono::Utc::now();
        Ok(Some(row.clone()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
