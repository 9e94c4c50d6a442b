use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// StoredFile model - an uploaded file owned by a team.
///
/// Files are soft-deleted: `deleted_at` is set instead of removing the row,
/// and listings filter on `deleted_at IS NULL`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StoredFile {
    pub id: Uuid,
    pub team_id: Uuid,
    pub file_name: String,
    /// Size in megabytes, recorded by the upload service. NULL for rows
    /// uploaded before sizes were tracked.
    pub size_mb: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}
