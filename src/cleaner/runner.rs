//! Run orchestration: one blocking task per rule, joined before reporting.
//!
//! Rules never share state. Each task owns its rule, expands every pattern
//! first and only then deletes the matches in order. A failing rule stops
//! itself and nothing else.

use futures::future::join_all;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info_span, warn};

use super::config::{CleanupConfig, CleanupRule};
use super::deleter::Deleter;
use super::error::CleanerError;
use super::patterns;
use super::report::{CleanupReport, RuleReport, RuleStatus};

/// Lifecycle of a run, logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Loading,
    Dispatching,
    Running(usize),
    Drained,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunPhase::Loading => write!(f, "loading"),
            RunPhase::Dispatching => write!(f, "dispatching"),
            RunPhase::Running(n) => write!(f, "running {} tasks", n),
            RunPhase::Drained => write!(f, "drained"),
        }
    }
}

pub struct Cleaner {
    config: CleanupConfig,
}

impl Cleaner {
    pub fn new(config: CleanupConfig) -> Self {
        Self { config }
    }

    /// Load the config named by the environment and build a cleaner for it.
    pub fn from_env() -> Result<Self, CleanerError> {
        debug!(phase = %RunPhase::Loading, "run phase");
        Ok(Self::new(CleanupConfig::from_env()?))
    }

    /// Clean every rule concurrently and wait for all of them.
    ///
    /// Per-rule failures end up in the report; this never fails as a whole.
    pub async fn run(self) -> CleanupReport {
        debug!(phase = %RunPhase::Dispatching, "run phase");

        let rules = self.config.into_rules();
        let roots: Vec<_> = rules.iter().map(|r| r.root.clone()).collect();

        let handles: Vec<JoinHandle<RuleReport>> = rules
            .into_iter()
            .enumerate()
            .map(|(index, rule)| tokio::task::spawn_blocking(move || clean_rule(index, rule)))
            .collect();

        debug!(phase = %RunPhase::Running(handles.len()), "run phase");
        let results = join_all(handles).await;
        debug!(phase = %RunPhase::Drained, "run phase");

        let rules = results
            .into_iter()
            .zip(roots)
            .enumerate()
            .map(|(index, (result, root))| joined_report(index, root, result))
            .collect();

        CleanupReport { rules }
    }
}

/// Turn a joined task into its rule report, recording a panic as a failure.
pub fn joined_report(index: usize, root: PathBuf, result: Result<RuleReport, JoinError>) -> RuleReport {
    match result {
        Ok(report) => report,
        Err(e) => {
            let err = CleanerError::TaskAborted {
                root: root.clone(),
                reason: e.to_string(),
            };
            error!("{}", err);
            let mut report = RuleReport::new(index, root);
            report.status = RuleStatus::Failed(err);
            report
        }
    }
}

/// Process one rule end to end on the current thread.
///
/// Failures are logged here, at the task boundary, and recorded in the
/// returned report.
pub fn clean_rule(index: usize, rule: CleanupRule) -> RuleReport {
    let span = info_span!("rule", index, root = %rule.root.display());
    let _guard = span.enter();

    let mut report = RuleReport::new(index, rule.root.clone());

    match fs::metadata(&rule.root) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let err = CleanerError::DirectoryNotFound { path: rule.root };
            warn!("{}", err);
            report.status = RuleStatus::RootMissing;
            return report;
        }
        _ => {}
    }

    let result = patterns::expand(&rule.root, &rule.patterns)
        .and_then(|matches| remove_matches(&matches, &mut report));

    if let Err(err) = result {
        error!("cleanup failed: {}", err);
        report.status = RuleStatus::Failed(err);
    }
    report
}

/// Delete `matches` in order, stopping at the first failure.
pub fn remove_matches(matches: &[PathBuf], report: &mut RuleReport) -> Result<(), CleanerError> {
    report.matched = matches.len();

    for path in matches {
        if Deleter::remove_all(path)? {
            report.removed += 1;
        }
    }
    Ok(())
}
