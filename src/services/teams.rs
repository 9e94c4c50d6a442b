use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::TeamMembership;

pub struct TeamService;

impl TeamService {
    /// Lists the teams a user belongs to, with names for display
    pub async fn memberships_for_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> AppResult<Vec<TeamMembership>> {
        let memberships = sqlx::query_as::<_, TeamMembership>(
            r#"
            SELECT m.team_id, t.name AS team_name
            FROM team_memberships m
            JOIN teams t ON t.id = m.team_id
            WHERE m.user_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(memberships)
    }

    /// Checks whether a user belongs to a team
    pub async fn is_member(pool: &PgPool, user_id: Uuid, team_id: Uuid) -> AppResult<bool> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM team_memberships
            WHERE user_id = $1 AND team_id = $2
            "#,
        )
        .bind(user_id)
        .bind(team_id)
        .fetch_one(pool)
        .await?;

        Ok(count.0 > 0)
    }

    /// Guard applied to the `is_member` lookup result. Key creation and
    /// team file listing both reject non-members with Forbidden.
    pub fn require_member(is_member: bool, team_id: Uuid) -> AppResult<()> {
        if is_member {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "Not a member of team {}",
                team_id
            )))
        }
    }
}
