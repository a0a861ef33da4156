//! CLI test helpers
//!
//! Provides Arc<Services> wrappers matching CLI execute() signatures.

use crate::common::create_test_services;
use segkit::core::services::Services;
use std::sync::Arc;

/// Create whitespace test services wrapped in Arc
pub fn create_cli_test_services() -> Arc<Services> {
    Arc::new(create_test_services())
}

/// Owned strings from literals, as clap would produce them
pub fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
