//! Per-file classification against fixed naming conventions.
//!
//! The three checks are independent; a file may satisfy more than one.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Filenames recognized as project manifests, lock files, or container
/// build descriptors. Matched on the filename alone, at any depth.
pub static META_FILES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "requirements.txt",
        "pyproject.toml",
        "Pipfile",
        "environment.yml",
        "package.json",
        "package-lock.json",
        "Dockerfile",
        "docker-compose.yml",
    ])
});

/// Extensions counted as templates when the path has a `templates` segment.
pub static TEMPLATE_EXTS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from([".html", ".jinja", ".j2"]));

pub fn is_meta_file(file_name: &str) -> bool {
    META_FILES.contains(file_name)
}

/// Template file: some path segment is literally `templates` and the
/// extension is one of the templating extensions.
pub fn is_template(segments: &[&str], ext: &str) -> bool {
    segments.iter().any(|s| *s == "templates") && TEMPLATE_EXTS.contains(ext)
}

/// Workflow file: first segment is `.github` with a `workflows` segment
/// somewhere below. `.github` is also on the traversal denylist, so in a
/// normal run this list stays empty.
pub fn is_workflow(segments: &[&str]) -> bool {
    segments.first() == Some(&".github") && segments.iter().any(|s| *s == "workflows")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_files() {
        assert!(is_meta_file("requirements.txt"));
        assert!(is_meta_file("Dockerfile"));
        assert!(is_meta_file("package-lock.json"));
        assert!(!is_meta_file("requirements-dev.txt"));
        assert!(!is_meta_file("dockerfile"));
    }

    #[test]
    fn test_template_detection() {
        assert!(is_template(&["app", "templates", "index.html"], ".html"));
        assert!(is_template(&["templates", "mail.j2"], ".j2"));
        // Right directory, wrong extension.
        assert!(!is_template(&["app", "templates", "notes.txt"], ".txt"));
        // Right extension, no templates segment.
        assert!(!is_template(&["docs", "index.html"], ".html"));
        // Segment must match exactly.
        assert!(!is_template(&["old_templates", "index.html"], ".html"));
    }

    #[test]
    fn test_workflow_detection() {
        assert!(is_workflow(&[".github", "workflows", "ci.yml"]));
        assert!(is_workflow(&[".github", "workflows", "deploy", "prod.yml"]));
        assert!(!is_workflow(&[".github", "dependabot.yml"]));
        assert!(!is_workflow(&["ci", "workflows", "ci.yml"]));
    }
}
