pub mod api_key;
pub mod file;
pub mod profile;
pub mod team;
pub mod usage;

pub use api_key::{ApiKey, CreateApiKey};
pub use file::StoredFile;
pub use profile::Profile;
pub use team::TeamMembership;
pub use usage::{EntitlementLimits, ResourceUsage, Tier, UsageView};
