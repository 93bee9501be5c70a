//! Per-rule outcomes and the aggregate report for one run.

use std::fmt;
use std::path::PathBuf;

use super::error::CleanerError;

/// How a single rule's task ended.
#[derive(Debug)]
pub enum RuleStatus {
    /// Every match was expanded and removed.
    Completed,
    /// The root did not exist; nothing was evaluated.
    RootMissing,
    /// Expansion or deletion stopped the rule early.
    Failed(CleanerError),
}

#[derive(Debug)]
pub struct RuleReport {
    /// Position of the rule in the config file.
    pub index: usize,
    pub root: PathBuf,
    pub matched: usize,
    pub removed: usize,
    pub status: RuleStatus,
}

impl RuleReport {
    pub fn new(index: usize, root: PathBuf) -> Self {
        Self {
            index,
            root,
            matched: 0,
            removed: 0,
            status: RuleStatus::Completed,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, RuleStatus::Failed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, RuleStatus::RootMissing)
    }

    pub fn error(&self) -> Option<&CleanerError> {
        match &self.status {
            RuleStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Outcome of a whole run, one entry per dispatched rule in config order.
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub rules: Vec<RuleReport>,
}

impl CleanupReport {
    pub fn dispatched(&self) -> usize {
        self.rules.len()
    }

    pub fn failed(&self) -> usize {
        self.rules.iter().filter(|r| r.is_failed()).count()
    }

    pub fn skipped(&self) -> usize {
        self.rules.iter().filter(|r| r.is_skipped()).count()
    }

    pub fn matched(&self) -> usize {
        self.rules.iter().map(|r| r.matched).sum()
    }

    pub fn removed(&self) -> usize {
        self.rules.iter().map(|r| r.removed).sum()
    }

    /// True when no rule failed. Skipped roots do not count as failures.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for CleanupReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} rules, {} paths removed, {} skipped, {} failed",
            self.dispatched(),
            self.removed(),
            self.skipped(),
            self.failed()
        )
    }
}
