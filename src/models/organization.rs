use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in the `organizations` table.
///
/// `id` is assigned at insert and never changes. `code` carries a unique
/// index. `updated_at` is refreshed by every update statement.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct OrganizationModel {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
