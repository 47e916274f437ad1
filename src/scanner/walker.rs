//! Tree traversal with a fixed directory denylist.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use ignore::{Walk, WalkBuilder};

/// Directory names pruned before descent, at every depth: version control,
/// CI config, virtual environments, dependency caches, build output, and
/// tool caches.
pub static DIR_SKIP: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        ".git",
        ".github",
        "venv",
        ".venv",
        "node_modules",
        "__pycache__",
        "dist",
        "build",
        ".mypy_cache",
    ])
});

/// Whether a directory name is excluded from traversal.
pub fn is_excluded_dir(name: &str) -> bool {
    DIR_SKIP.contains(name) || name.starts_with(".pytest_cache")
}

/// Build the walker for one run.
///
/// Standard ignore-file semantics are disabled on purpose: hidden files are
/// audited and `.gitignore` has no effect on the reports. Exclusion is only
/// the fixed denylist, applied to directories before recursion, so an
/// excluded subtree is never visited. Symlinks are not followed. Entries
/// come back in sorted filename order, which keeps repeat runs over an
/// unchanged tree deterministic.
pub fn build_walker(root: &Path) -> Walk {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            if !entry.file_type().map_or(false, |ft| ft.is_dir()) {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if is_excluded_dir(&name) {
                tracing::debug!("Pruning excluded directory: {}", entry.path().display());
                return false;
            }
            true
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn walked_files(root: &Path) -> Vec<String> {
        build_walker(root)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map_or(false, |ft| ft.is_file()))
            .map(|entry| {
                entry
                    .path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_excluded_dir_names() {
        assert!(is_excluded_dir(".git"));
        assert!(is_excluded_dir("node_modules"));
        assert!(is_excluded_dir(".pytest_cache"));
        assert!(is_excluded_dir(".pytest_cache_py311"));
        assert!(!is_excluded_dir("src"));
        assert!(!is_excluded_dir("templates"));
    }

    #[test]
    fn test_denylisted_subtrees_are_never_visited() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("keep.txt"), "ok").unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "x").unwrap();
        fs::create_dir_all(root.join("src/__pycache__")).unwrap();
        fs::write(root.join("src/__pycache__/mod.pyc"), "x").unwrap();
        fs::write(root.join("src/mod.py"), "x").unwrap();

        let files = walked_files(root);
        assert!(files.contains(&"keep.txt".to_string()));
        assert!(files.contains(&"src/mod.py".to_string()));
        assert!(!files.iter().any(|f| f.contains("node_modules")));
        assert!(!files.iter().any(|f| f.contains("__pycache__")));
    }

    #[test]
    fn test_hidden_files_are_walked() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join(".env"), "A=1").unwrap();

        let files = walked_files(root);
        assert!(files.contains(&".env".to_string()));
    }

    #[test]
    fn test_pruning_applies_to_directories_only() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        // A regular file that shares its name with a denylisted directory
        // still comes out of the walker.
        fs::write(root.join("build"), "not a directory").unwrap();

        let files = walked_files(root);
        assert!(files.contains(&"build".to_string()));
    }

    #[test]
    fn test_sorted_walk_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("b.txt"), "").unwrap();
        fs::write(root.join("a.txt"), "").unwrap();
        fs::write(root.join("c.txt"), "").unwrap();

        let files = walked_files(root);
        assert_eq!(files, vec!["a.txt", "b.txt", "c.txt"]);
    }
}
