//! Entitlement and usage aggregation.
//!
//! Pure functions that turn a subscription tier and raw counters into the
//! bounded `{used, limit, percentage}` summaries the dashboard renders.
//! No I/O, no state: callers fetch the counters and pass them in, so the
//! whole computation is deterministic and testable in isolation.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::models::{EntitlementLimits, ResourceUsage, Tier, UsageView};

/// Monthly API call quota for the free tier
const FREE_API_CALL_LIMIT: i64 = 100;
/// Storage quota in MB for the free tier (1 GB)
const FREE_STORAGE_LIMIT_MB: i64 = 1024;
/// Monthly API call quota for the pro tier
const PRO_API_CALL_LIMIT: i64 = 1000;
/// Storage quota in MB for the pro tier (10 GB)
const PRO_STORAGE_LIMIT_MB: i64 = 10 * 1024;

/// Returns the limit pair for a tier
pub fn limits_for(tier: Tier) -> EntitlementLimits {
    match tier {
        Tier::Free => EntitlementLimits {
            api_call_limit: FREE_API_CALL_LIMIT,
            storage_limit_mb: FREE_STORAGE_LIMIT_MB,
        },
        Tier::Pro => EntitlementLimits {
            api_call_limit: PRO_API_CALL_LIMIT,
            storage_limit_mb: PRO_STORAGE_LIMIT_MB,
        },
    }
}

/// Normalized utilization in [0, 100].
///
/// This feeds a progress bar, not billing enforcement, so degenerate inputs
/// degrade to 0 instead of faulting: a non-positive limit yields 0 rather
/// than dividing by zero, and a negative count clamps to 0 rather than
/// rendering a negative bar. Over-quota usage clamps to 100.
pub fn usage_percentage(used: i64, limit: i64) -> f64 {
    if limit <= 0 {
        return 0.0;
    }
    let used = used.max(0);
    (used as f64 / limit as f64 * 100.0).min(100.0)
}

/// First instant of the calendar month containing `now`, in UTC.
///
/// Used as the lower bound when counting billable calls, so the count and
/// the window are computed from the same clock reading. Idempotent at the
/// boundary: the 1st at midnight maps to itself.
pub fn current_month_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let first_day = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .expect("the first day of a valid month always exists");
    let midnight = first_day
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");
    Utc.from_utc_datetime(&midnight)
}

/// Composes the tier limits and per-resource percentages into the summary
/// shown on the dashboard. Pure function of its three inputs.
pub fn build_usage_view(tier: Tier, api_call_count: i64, storage_used_mb: i64) -> UsageView {
    let limits = limits_for(tier);

    UsageView {
        api_calls: ResourceUsage {
            used: api_call_count,
            limit: limits.api_call_limit,
            percentage: usage_percentage(api_call_count, limits.api_call_limit),
        },
        storage: ResourceUsage {
            used: storage_used_mb,
            limit: limits.storage_limit_mb,
            percentage: usage_percentage(storage_used_mb, limits.storage_limit_mb),
        },
    }
}
