//! Unit tests module
//!
//! Contains tests for individual components in isolation.

mod config_test;
mod dashboard_test;
mod teams_test;
