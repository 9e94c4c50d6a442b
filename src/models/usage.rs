use serde::Serialize;

/// Subscription tier gating the numeric limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Pro,
}

impl Tier {
    /// Builds a tier from the billing flag.
    ///
    /// A missing flag fails closed to Free: an unsynced billing state
    /// must never grant Pro limits.
    pub fn from_flag(is_pro: Option<bool>) -> Self {
        if is_pro.unwrap_or(false) {
            Tier::Pro
        } else {
            Tier::Free
        }
    }

    pub fn is_pro(self) -> bool {
        matches!(self, Tier::Pro)
    }
}

/// The limit pair associated with a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntitlementLimits {
    pub api_call_limit: i64,
    pub storage_limit_mb: i64,
}

/// Display-ready usage summary for a single metered resource
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceUsage {
    pub used: i64,
    pub limit: i64,
    /// Always within [0, 100], even over quota
    pub percentage: f64,
}

/// Usage summary for the two metered resources shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UsageView {
    pub api_calls: ResourceUsage,
    pub storage: ResourceUsage,
}
