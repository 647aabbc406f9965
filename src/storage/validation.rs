//! Path validation
//!
//! Handles filename sanitization and path safety checks.

use std::path::{Component, Path};

/// Name used when a client filename sanitizes down to nothing
pub const FALLBACK_FILENAME: &str = "upload";

/// Sanitize a client-supplied filename into a safe relative name.
///
/// Keeps only the final path segment, so traversal attempts like
/// `../../etc/passwd` collapse to `passwd` and always resolve inside the
/// upload directory. A plain filename passes through unchanged. Distinct
/// unsafe inputs may collapse to the same name; the collision shows up
/// downstream as "file already exists".
pub fn sanitize_filename(filename: &str) -> String {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or("");

    match name {
        "" | "." | ".." => FALLBACK_FILENAME.to_string(),
        name => name.to_string(),
    }
}

/// Validate that a relative path is safe (no directory traversal)
///
/// Safe means every component is a plain name: no parent-directory
/// segments, no absolute-path prefixes.
pub fn is_safe_path(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_)))
        && path.components().next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_name_unchanged() {
        assert_eq!(sanitize_filename("report.csv"), "report.csv");
        assert_eq!(sanitize_filename("training data.jsonl"), "training data.jsonl");
    }

    #[test]
    fn test_traversal_collapsed() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("/etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("dir/sub/file.txt"), "file.txt");
        assert_eq!(sanitize_filename("..\\..\\windows\\cmd.exe"), "cmd.exe");
    }

    #[test]
    fn test_degenerate_names_fall_back() {
        assert_eq!(sanitize_filename(""), FALLBACK_FILENAME);
        assert_eq!(sanitize_filename(".."), FALLBACK_FILENAME);
        assert_eq!(sanitize_filename("."), FALLBACK_FILENAME);
        assert_eq!(sanitize_filename("a/b/"), FALLBACK_FILENAME);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            sanitize_filename("../data/train.jsonl"),
            sanitize_filename("../data/train.jsonl")
        );
    }

    #[test]
    fn test_sanitized_output_is_safe() {
        for input in ["../../x", "a/b/c.txt", "..", "normal.txt", "\\\\share\\f"] {
            let name = sanitize_filename(input);
            assert!(is_safe_path(Path::new(&name)), "unsafe output for {}", input);
        }
    }
}
