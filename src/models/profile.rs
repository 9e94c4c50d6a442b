use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::Tier;

/// Profile row for a dashboard user.
///
/// Billing state arrives as a nullable flag synced from the billing
/// provider; `is_pro = NULL` means the sync has never run for this user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub onboarding_completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub is_pro: Option<bool>,
}

impl Profile {
    /// Subscription tier, failing closed to Free when the flag is absent
    pub fn tier(&self) -> Tier {
        Tier::from_flag(self.is_pro)
    }

    /// Whether the user has finished the onboarding flow
    pub fn has_completed_onboarding(&self) -> bool {
        self.onboarding_completed_at.is_some()
    }
}
