//! Filesystem path normalization.
//!
//! - `normalize_path` - absolute form (canonicalize + fallback)
//! - `resolve_path` - user-supplied paths, relative to cwd or the content dir
//! - `to_slash` - platform path to `/`-separated string for URLs

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`), which fails
/// for paths that don't exist yet (e.g. an output dir before the first
/// build). Falls back to the path itself when absolute, else joined to cwd.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a path given on the command line.
///
/// Tries in order:
/// 1. If absolute, use as-is
/// 2. If exists relative to cwd (`content/posts/a.md`), normalize it
/// 3. Otherwise, relative to `fallback_dir` (`posts/a.md`)
#[inline]
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if path.exists() {
        return normalize_path(path);
    }

    normalize_path(&fallback_dir.join(path))
}

/// Join the normal components of a relative path with `/`.
///
/// `.` components are dropped, so `./posts\a.md` on Windows and
/// `posts/a.md` elsewhere both become `posts/a.md`.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_is_absolute() {
        assert!(normalize_path(Path::new("relative/missing.md")).is_absolute());
        assert!(normalize_path(Path::new("/absolute/missing.md")).is_absolute());
    }

    #[test]
    fn test_resolve_path_prefers_absolute() {
        let resolved = resolve_path(Path::new("/absolute/a.md"), Path::new("/content"));
        assert_eq!(resolved, PathBuf::from("/absolute/a.md"));
    }

    #[test]
    fn test_resolve_path_falls_back_to_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("posts")).unwrap();
        std::fs::write(dir.path().join("posts/a.md"), "# A").unwrap();

        let resolved = resolve_path(Path::new("posts/a.md"), dir.path());
        assert_eq!(resolved, normalize_path(&dir.path().join("posts/a.md")));
    }

    #[test]
    fn test_to_slash() {
        assert_eq!(to_slash(Path::new("posts/a.md")), "posts/a.md");
        assert_eq!(to_slash(Path::new("./index.md")), "index.md");
        assert_eq!(to_slash(Path::new("")), "");
    }
}
