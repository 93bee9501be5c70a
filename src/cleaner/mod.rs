//! Cleaner module - deletes glob matches under configured root directories
//!
//! Each configured rule is processed by its own task. Rules are expanded
//! with the glob crate and every match is removed recursively.

pub mod config;
pub mod deleter;
pub mod error;
pub mod patterns;
pub mod report;
pub mod runner;

pub use config::{CleanupConfig, CleanupRule, CONFIG_ENV};
pub use deleter::Deleter;
pub use error::CleanerError;
pub use report::{CleanupReport, RuleReport, RuleStatus};
pub use runner::{clean_rule, joined_report, remove_matches, Cleaner, RunPhase};
