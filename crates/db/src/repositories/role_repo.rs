//! Repository for the `roles` table.

use roster_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::RoleRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, is_active, created_at, updated_at";

/// Provides CRUD operations for roles. Rows are never physically deleted.
pub struct RoleRepo;

impl RoleRepo {
    /// Insert a new role, returning the created row.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        is_active: bool,
    ) -> Result<RoleRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO roles (name, is_active)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoleRow>(&query)
            .bind(name)
            .bind(is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a role by its internal ID, including inactive rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RoleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, RoleRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active roles ordered by ID ascending.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<RoleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE is_active = TRUE ORDER BY id ASC");
        sqlx::query_as::<_, RoleRow>(&query).fetch_all(pool).await
    }

    /// Find a role with the given name (case-sensitive) whose ID differs from
    /// `exclude_id`. Inactive rows count.
    pub async fn find_by_name_excluding(
        pool: &PgPool,
        name: &str,
        exclude_id: DbId,
    ) -> Result<Option<RoleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE name = $1 AND id <> $2 LIMIT 1");
        sqlx::query_as::<_, RoleRow>(&query)
            .bind(name)
            .bind(exclude_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the name and active flag of a role.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &str,
        is_active: bool,
    ) -> Result<Option<RoleRow>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET
                name = $2,
                is_active = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoleRow>(&query)
            .bind(id)
            .bind(name)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }
}
