//! Path helpers for the filename and executable-path subcommands.
//!
//! `dirname` and `basename` follow POSIX string semantics rather than
//! `std::path::Path`, which normalizes away trailing slashes and `.` components.

use std::path::{Path, PathBuf};

/// POSIX `dirname(3)` on a string.
pub fn dirname(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    match trimmed.rfind('/') {
        None => ".".to_string(),
        Some(idx) => {
            let head = trimmed[..idx].trim_end_matches('/');
            if head.is_empty() {
                "/".to_string()
            } else {
                head.to_string()
            }
        }
    }
}

/// POSIX `basename(3)` on a string.
pub fn basename(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    match trimmed.rfind('/') {
        None => trimmed.to_string(),
        Some(idx) => trimmed[idx + 1..].to_string(),
    }
}

/// Canonical form of an absolute path, or the path itself when it cannot be
/// canonicalized or the canonical target does not exist. Relative paths are
/// returned untouched: their meaning depends on the launching process.
pub fn canonical_or_raw(path: &Path) -> PathBuf {
    if !path.is_absolute() {
        return path.to_path_buf();
    }
    match path.canonicalize() {
        Ok(real) if real.exists() => real,
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn dirname_cases() {
        assert_eq!(dirname("/usr/share/fish/config.fish"), "/usr/share/fish");
        assert_eq!(dirname("/usr/share/fish/"), "/usr/share");
        assert_eq!(dirname("config.fish"), ".");
        assert_eq!(dirname("/config.fish"), "/");
        assert_eq!(dirname("//a//b//"), "//a");
        assert_eq!(dirname("/"), "/");
        assert_eq!(dirname(""), ".");
    }

    #[test]
    fn basename_cases() {
        assert_eq!(basename("/usr/share/fish/config.fish"), "config.fish");
        assert_eq!(basename("/usr/share/fish/"), "fish");
        assert_eq!(basename("config.fish"), "config.fish");
        assert_eq!(basename("/"), "/");
        assert_eq!(basename(""), ".");
    }

    #[test]
    fn canonicalizes_existing_absolute_paths() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("bin");
        std::fs::create_dir(&nested).unwrap();
        let dotted = nested.join("..").join("bin");
        assert_eq!(
            canonical_or_raw(&dotted),
            nested.canonicalize().unwrap()
        );
    }

    #[test]
    fn missing_absolute_path_is_kept() {
        let path = Path::new("/definitely/not/here/fish");
        assert_eq!(canonical_or_raw(path), path);
    }

    #[test]
    fn relative_path_is_kept() {
        let path = Path::new("bin/../fish");
        assert_eq!(canonical_or_raw(path), path);
    }
}
