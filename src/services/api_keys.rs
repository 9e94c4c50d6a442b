use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::ApiKey;

pub struct ApiKeyService;

impl ApiKeyService {
    /// Lists the keys for every team the user belongs to, newest first
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> AppResult<Vec<ApiKey>> {
        let keys = sqlx::query_as::<_, ApiKey>(
            r#"
            SELECT k.id, k.api_key, k.team_id, k.user_id, k.created_at
            FROM api_keys k
            JOIN team_memberships m ON m.team_id = k.team_id
            WHERE m.user_id = $1
            ORDER BY k.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(keys)
    }

    /// Generates and stores a new key for a team.
    /// Membership must be checked by the caller before this is invoked.
    pub async fn create(pool: &PgPool, user_id: Uuid, team_id: Uuid) -> AppResult<ApiKey> {
        let key_str = generate_api_key();

        let key = sqlx::query_as::<_, ApiKey>(
            r#"
            INSERT INTO api_keys (api_key, team_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, api_key, team_id, user_id, created_at
            "#,
        )
        .bind(&key_str)
        .bind(team_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(key)
    }
}

/// Generates a cryptographically secure 40-character hex API key
pub fn generate_api_key() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    hex::encode(bytes)
}
