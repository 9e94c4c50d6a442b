use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// ApiKey model - a team-scoped key for the public API
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ApiKey {
    pub id: Uuid,
    pub api_key: String,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// DTO for generating a new key
#[derive(Debug, Deserialize)]
pub struct CreateApiKey {
    pub team_id: Uuid,
}
