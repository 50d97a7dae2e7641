//! Role lifecycle service.
//!
//! [`RoleManager`] applies the role business rules on top of an injected
//! [`RoleStore`]. Every operation is an independent unit of work: there is
//! no transaction spanning the read-then-write sequences in `update` and
//! `remove`, so the name uniqueness check is best-effort under concurrency.

use std::sync::Arc;

use crate::error::{RoleError, RoleOp};
use crate::role::{CreateRole, NewRole, Role, UpdateRole};
use crate::store::{RoleStore, StoreError};
use crate::types::DbId;

/// Create, list, fetch, rename and soft-delete roles.
///
/// Cheaply cloneable; clones share the same store.
#[derive(Clone)]
pub struct RoleManager {
    store: Arc<dyn RoleStore>,
}

impl RoleManager {
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self { store }
    }

    /// Persist a new role built from `input`.
    ///
    /// No blank or uniqueness check is applied here, unlike [`Self::update`].
    pub async fn create(&self, input: &CreateRole) -> Result<Role, RoleError> {
        let role = NewRole::from(input);
        self.store
            .insert(&role)
            .await
            .map_err(RoleError::storage(RoleOp::Create))
    }

    /// List active roles. An empty result is reported as [`RoleError::NoActiveRoles`].
    pub async fn find_all(&self) -> Result<Vec<Role>, RoleError> {
        let roles = self
            .store
            .list_active()
            .await
            .map_err(RoleError::storage(RoleOp::FindAll))?;
        if roles.is_empty() {
            return Err(RoleError::NoActiveRoles);
        }
        Ok(roles)
    }

    /// Fetch a role by id, active or not.
    pub async fn find_one(&self, id: DbId) -> Result<Role, RoleError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(RoleError::storage(RoleOp::FindOne))?
            .ok_or(RoleError::NotFound { id })
    }

    /// Rename a role.
    ///
    /// Checks run in order: the role exists, the name is not blank, and no
    /// other role (active or not) already uses the name. The supplied name is
    /// stored as given; trimming only decides blankness.
    pub async fn update(&self, id: DbId, input: &UpdateRole) -> Result<Role, RoleError> {
        let mut role = self
            .store
            .find_by_id(id)
            .await
            .map_err(RoleError::storage(RoleOp::Update))?
            .ok_or(RoleError::NotFound { id })?;

        let name = match input.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(RoleError::NameRequired),
        };

        let conflict = self
            .store
            .find_name_conflict(name, id)
            .await
            .map_err(RoleError::storage(RoleOp::Update))?;
        if conflict.is_some() {
            return Err(RoleError::NameTaken {
                name: name.to_string(),
            });
        }

        role.name = name.to_string();
        self.persist(role, RoleOp::Update).await
    }

    /// Soft-delete a role by clearing its active flag.
    ///
    /// Removing an already inactive role succeeds again.
    pub async fn remove(&self, id: DbId) -> Result<Role, RoleError> {
        let mut role = self
            .store
            .find_by_id(id)
            .await
            .map_err(RoleError::storage(RoleOp::Remove))?
            .ok_or(RoleError::NotFound { id })?;

        role.is_active = false;
        self.persist(role, RoleOp::Remove).await
    }

    /// Check that the underlying store is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    async fn persist(&self, role: Role, op: RoleOp) -> Result<Role, RoleError> {
        let id = role.id;
        self.store
            .save(&role)
            .await
            .map_err(RoleError::storage(op))?
            .ok_or(RoleError::NotFound { id })
    }
}
