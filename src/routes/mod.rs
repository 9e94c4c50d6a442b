pub mod dashboard;
pub mod files;
pub mod health;
pub mod keys;
pub mod usage;
