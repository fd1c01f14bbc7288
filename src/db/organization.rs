use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::OrganizationModel;

/// Inserts a new organization. The unique index on `code` makes a duplicate
/// insert fail with a database-level constraint violation.
pub async fn insert_organization<'e, E>(
    executor: E,
    name: &str,
    code: &str,
) -> Result<OrganizationModel, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        "INSERT INTO organizations (id, name, code)
         VALUES ($1, $2, $3)
         RETURNING id, name, code, is_active, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(code)
    .fetch_one(executor)
    .await
}

pub async fn find_organization_by_code<'e, E>(
    executor: E,
    code: &str,
) -> Result<Option<OrganizationModel>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        "SELECT id, name, code, is_active, created_at, updated_at
         FROM organizations
         WHERE code = $1",
    )
    .bind(code)
    .fetch_optional(executor)
    .await
}

/// Renames an organization, refreshing `updated_at`. Returns `None` when the
/// id does not exist.
pub async fn rename_organization<'e, E>(
    executor: E,
    id: Uuid,
    name: &str,
) -> Result<Option<OrganizationModel>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        "UPDATE organizations SET name = $1, updated_at = NOW()
         WHERE id = $2
         RETURNING id, name, code, is_active, created_at, updated_at",
    )
    .bind(name)
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Flips the active flag, refreshing `updated_at`.
pub async fn set_organization_active<'e, E>(
    executor: E,
    id: Uuid,
    is_active: bool,
) -> Result<Option<OrganizationModel>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        "UPDATE organizations SET is_active = $1, updated_at = NOW()
         WHERE id = $2
         RETURNING id, name, code, is_active, created_at, updated_at",
    )
    .bind(is_active)
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_organizations<'e, E>(
    executor: E,
) -> Result<Vec<OrganizationModel>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        "SELECT id, name, code, is_active, created_at, updated_at
         FROM organizations
         ORDER BY created_at",
    )
    .fetch_all(executor)
    .await
}
