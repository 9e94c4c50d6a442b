use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{ApiKey, Profile, StoredFile, TeamMembership, Tier, UsageView};
use crate::services::usage;
use crate::services::{ApiKeyService, FileService, ProfileService, TeamService, UsageLogService};

/// Outcome of the onboarding guard.
///
/// Users without a profile, or with a profile that never completed
/// onboarding, get a tagged result instead of a control-flow short-circuit;
/// the frontend owns the redirect.
#[derive(Debug)]
pub enum OnboardingGate {
    Ready(Profile),
    NeedsOnboarding,
}

impl OnboardingGate {
    /// Evaluates the guard for an optional profile lookup result
    pub fn evaluate(profile: Option<Profile>) -> Self {
        match profile {
            Some(p) if p.has_completed_onboarding() => OnboardingGate::Ready(p),
            _ => OnboardingGate::NeedsOnboarding,
        }
    }
}

/// Everything the dashboard page renders for an onboarded user
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub profile: Profile,
    pub tier: Tier,
    pub api_keys: Vec<ApiKey>,
    pub files: Vec<StoredFile>,
    pub teams: Vec<TeamMembership>,
    pub usage: UsageView,
}

/// Dashboard response, tagged so the frontend can route to onboarding
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Dashboard {
    Ready(Box<DashboardData>),
    NeedsOnboarding,
}

pub struct DashboardService;

impl DashboardService {
    /// Assembles the full dashboard for a user.
    ///
    /// The reads are independent except that the first API key selects
    /// which team's files are listed. `now` is passed in so the usage
    /// window and the count come from one clock reading.
    pub async fn load(pool: &PgPool, user_id: Uuid, now: DateTime<Utc>) -> AppResult<Dashboard> {
        let profile = ProfileService::get_for_user(pool, user_id).await?;
        let profile = match OnboardingGate::evaluate(profile) {
            OnboardingGate::Ready(p) => p,
            OnboardingGate::NeedsOnboarding => return Ok(Dashboard::NeedsOnboarding),
        };

        let api_keys = ApiKeyService::list_for_user(pool, user_id).await?;
        let files = match api_keys.first() {
            Some(key) => FileService::list_for_team(pool, key.team_id).await?,
            None => Vec::new(),
        };
        let teams = TeamService::memberships_for_user(pool, user_id).await?;

        let window_start = usage::current_month_window_start(now);
        let api_call_count =
            UsageLogService::count_api_calls_since(pool, user_id, window_start).await?;

        // TODO: sum files.size_mb once the upload service backfills sizes
        let storage_used_mb = 0;

        let tier = profile.tier();
        let usage_view = usage::build_usage_view(tier, api_call_count, storage_used_mb);

        Ok(Dashboard::Ready(Box::new(DashboardData {
            profile,
            tier,
            api_keys,
            files,
            teams,
            usage: usage_view,
        })))
    }
}
