// Glob expansion for cleanup rules
// Patterns are resolved relative to a rule's root using the glob crate

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use tracing::{debug, warn};

use super::error::CleanerError;

/// `*` and `?` stay within one path component, dotfiles are not special.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Expand every pattern of a rule against `root`
///
/// Supports patterns like:
/// - `*.tmp` - files ending in .tmp directly under root
/// - `log?.txt` - log1.txt, logA.txt, etc.
/// - `[abc]*` - entries starting with a, b, or c
/// - `**/__pycache__` - __pycache__ at any depth
///
/// Matches are returned in pattern order without deduplication. A pattern
/// that matches nothing contributes nothing.
///
/// # Errors
/// Returns `InvalidPattern` at the first pattern the glob engine rejects;
/// no partial match list is returned in that case.
pub fn expand(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, CleanerError> {
    let mut matches = Vec::new();

    for pattern in patterns {
        let Some(search) = search_pattern(root, pattern)? else {
            warn!("skipping empty pattern under {}", root.display());
            continue;
        };

        let paths = glob::glob_with(&search, MATCH_OPTIONS).map_err(|source| {
            CleanerError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            }
        })?;

        let before = matches.len();
        for entry in paths {
            match entry {
                Ok(path) => matches.push(path),
                // Unreadable directories are skipped, not fatal
                Err(e) => warn!("skipping unreadable path {}: {}", e.path().display(), e.error()),
            }
        }
        debug!(pattern = %pattern, matched = matches.len() - before, "expanded pattern");
    }

    Ok(matches)
}

/// Build the glob search string for `pattern` under `root`
///
/// The root is escaped so only the pattern carries wildcards. Leading
/// separators are dropped from the pattern to keep it under root. Returns
/// `None` for a pattern that is empty once trimmed.
pub fn search_pattern(root: &Path, pattern: &str) -> Result<Option<String>, CleanerError> {
    let relative = pattern.trim_start_matches(|c: char| c == '/' || c == MAIN_SEPARATOR);
    if relative.is_empty() {
        return Ok(None);
    }

    let root_str = root.to_str().ok_or_else(|| CleanerError::NonUtf8Path {
        path: root.to_path_buf(),
    })?;

    let joined = Path::new(&Pattern::escape(root_str)).join(relative);
    Ok(Some(joined.to_string_lossy().into_owned()))
}
