pub mod api_keys;
pub mod dashboard;
pub mod files;
pub mod profiles;
pub mod teams;
pub mod usage;
pub mod usage_logs;

pub use api_keys::ApiKeyService;
pub use dashboard::{Dashboard, DashboardData, DashboardService, OnboardingGate};
pub use files::FileService;
pub use profiles::ProfileService;
pub use teams::TeamService;
pub use usage::{build_usage_view, current_month_window_start, limits_for, usage_percentage};
pub use usage_logs::UsageLogService;
