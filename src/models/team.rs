use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A user's membership in a team, with the team name denormalized for display
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TeamMembership {
    pub team_id: Uuid,
    pub team_name: String,
}
