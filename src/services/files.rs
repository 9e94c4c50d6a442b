use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::StoredFile;

pub struct FileService;

impl FileService {
    /// Lists a team's uploaded files, newest first, excluding soft-deleted rows
    pub async fn list_for_team(pool: &PgPool, team_id: Uuid) -> AppResult<Vec<StoredFile>> {
        let files = sqlx::query_as::<_, StoredFile>(
            r#"
            SELECT id, team_id, file_name, size_mb, created_at, deleted_at
            FROM files
            WHERE team_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .bind(team_id)
        .fetch_all(pool)
        .await?;

        Ok(files)
    }
}
