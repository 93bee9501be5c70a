// Tests for glob expansion under a rule root

use dirclean::cleaner::patterns::{expand, search_pattern};
use dirclean::cleaner::CleanerError;
use std::fs;
use std::path::{Path, PathBuf};

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"test").unwrap();
}

#[test]
fn test_expand_star_extension() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("x.tmp"));
    touch(&dir.path().join("y.log"));

    let matches = expand(dir.path(), &patterns(&["*.tmp"])).unwrap();
    assert_eq!(matches, vec![dir.path().join("x.tmp")]);
}

#[test]
fn test_expand_no_matches_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("y.log"));

    let matches = expand(dir.path(), &patterns(&["*.tmp", "cache"])).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_expand_empty_pattern_list() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("x.tmp"));

    assert!(expand(dir.path(), &[]).unwrap().is_empty());
}

#[test]
fn test_expand_keeps_pattern_order_and_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.tmp"));
    touch(&dir.path().join("b.log"));

    let matches = expand(dir.path(), &patterns(&["*.log", "a.tmp", "*.tmp"])).unwrap();
    assert_eq!(
        matches,
        vec![
            dir.path().join("b.log"),
            dir.path().join("a.tmp"),
            dir.path().join("a.tmp"),
        ]
    );
}

#[test]
fn test_expand_question_mark_and_class() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["log1.txt", "log2.txt", "log10.txt", "alpha", "beta", "gamma"] {
        touch(&dir.path().join(name));
    }

    let matches = expand(dir.path(), &patterns(&["log?.txt"])).unwrap();
    assert_eq!(
        matches,
        vec![dir.path().join("log1.txt"), dir.path().join("log2.txt")]
    );

    let matches = expand(dir.path(), &patterns(&["[ab]*"])).unwrap();
    assert_eq!(matches, vec![dir.path().join("alpha"), dir.path().join("beta")]);

    let matches = expand(dir.path(), &patterns(&["[!ab]*a"])).unwrap();
    assert_eq!(matches, vec![dir.path().join("gamma")]);
}

#[test]
fn test_expand_recursive_double_star() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("top.pyc"));
    touch(&dir.path().join("pkg/mod.pyc"));
    touch(&dir.path().join("pkg/deep/inner.pyc"));
    touch(&dir.path().join("pkg/deep/keep.py"));

    let mut matches = expand(dir.path(), &patterns(&["**/*.pyc"])).unwrap();
    matches.sort();

    let mut expected = vec![
        dir.path().join("top.pyc"),
        dir.path().join("pkg/mod.pyc"),
        dir.path().join("pkg/deep/inner.pyc"),
    ];
    expected.sort();
    assert_eq!(matches, expected);
}

#[test]
fn test_star_does_not_cross_directories() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("sub/nested.tmp"));

    assert!(expand(dir.path(), &patterns(&["*.tmp"])).unwrap().is_empty());
    assert_eq!(
        expand(dir.path(), &patterns(&["*/*.tmp"])).unwrap(),
        vec![dir.path().join("sub/nested.tmp")]
    );
}

#[test]
fn test_expand_matches_dotfiles() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join(".cache.tmp"));

    let matches = expand(dir.path(), &patterns(&["*.tmp"])).unwrap();
    assert_eq!(matches, vec![dir.path().join(".cache.tmp")]);
}

#[test]
fn test_expand_unterminated_class_fails() {
    let dir = tempfile::tempdir().unwrap();

    let result = expand(dir.path(), &patterns(&["[invalid"]));
    match result {
        Err(CleanerError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "[invalid"),
        other => panic!("Expected InvalidPattern error, got {:?}", other),
    }
}

#[test]
fn test_expand_stops_at_first_invalid_pattern() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("x.tmp"));

    let result = expand(dir.path(), &patterns(&["*.tmp", "a**", "*.log"]));
    match result {
        Err(CleanerError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "a**"),
        other => panic!("Expected InvalidPattern error, got {:?}", other),
    }
}

#[test]
fn test_root_metacharacters_are_literal() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("we[ir]d?");
    touch(&root.join("x.tmp"));
    // Would match if the root were treated as a glob
    touch(&dir.path().join("weid!/x.tmp"));

    let matches = expand(&root, &patterns(&["*.tmp"])).unwrap();
    assert_eq!(matches, vec![root.join("x.tmp")]);
}

#[test]
fn test_leading_separator_stays_under_root() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("x.tmp"));

    let matches = expand(dir.path(), &patterns(&["/x.tmp"])).unwrap();
    assert_eq!(matches, vec![dir.path().join("x.tmp")]);
}

#[test]
fn test_empty_pattern_matches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("x.tmp"));

    assert_eq!(search_pattern(dir.path(), "").unwrap(), None);
    assert_eq!(search_pattern(dir.path(), "/").unwrap(), None);
    assert!(expand(dir.path(), &patterns(&["", "/"])).unwrap().is_empty());
}

#[cfg(unix)]
#[test]
fn test_search_pattern_joins_as_path() {
    assert_eq!(
        search_pattern(Path::new("/tmp/a"), "*.tmp").unwrap(),
        Some("/tmp/a/*.tmp".to_string())
    );
    assert_eq!(
        search_pattern(Path::new("/tmp/a/"), "cache/**").unwrap(),
        Some("/tmp/a/cache/**".to_string())
    );
    assert_eq!(
        search_pattern(Path::new("/tmp/[x]"), "*").unwrap(),
        Some("/tmp/[[]x[]]/*".to_string())
    );
}

#[cfg(unix)]
#[test]
fn test_non_utf8_root_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let root = PathBuf::from(OsStr::from_bytes(b"/tmp/\xff"));
    assert!(matches!(
        expand(&root, &patterns(&["*"])),
        Err(CleanerError::NonUtf8Path { .. })
    ));
}
