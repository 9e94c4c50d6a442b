use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::Profile;

pub struct ProfileService;

impl ProfileService {
    /// Gets the profile for a user, if one exists
    pub async fn get_for_user(pool: &PgPool, user_id: Uuid) -> AppResult<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, name, email, onboarding_completed_at, is_pro
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }
}
