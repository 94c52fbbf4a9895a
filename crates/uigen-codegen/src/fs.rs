//! Filesystem helpers for the generator.

use std::fs;
use std::io;
use std::path::Path;
use uigen_core::Result;
use walkdir::WalkDir;

/// Recursively deletes everything below `path`.
///
/// With `remove_top` the directory itself is removed as well; without it
/// the directory is left in place, empty. A missing `path` is a no-op.
///
/// # Errors
///
/// Returns an I/O error if `path` is not a directory or an entry cannot be
/// removed.
///
/// # Examples
///
/// ```
/// use uigen_codegen::clear_tree;
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
/// std::fs::write(dir.path().join("a/b/c.txt"), "x").unwrap();
///
/// clear_tree(dir.path(), false).unwrap();
/// assert!(dir.path().is_dir());
/// assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
/// ```
pub fn clear_tree(path: &Path, remove_top: bool) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    if !metadata.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a directory: {}", path.display()),
        )
        .into());
    }

    let mut removed = 0usize;
    for entry in WalkDir::new(path).min_depth(1).contents_first(true) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
        removed += 1;
    }

    if remove_top {
        fs::remove_dir(path)?;
    }

    tracing::debug!(
        "Cleared {} ({removed} entries, root {})",
        path.display(),
        if remove_top { "removed" } else { "kept" }
    );
    Ok(())
}

/// Creates `dir` and its parents. Existing directories are not an error.
///
/// # Errors
///
/// Returns an I/O error if a directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn populated() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/components")).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::write(root.join("index.html"), "<html/>").unwrap();
        fs::write(root.join("src/main.ts"), "").unwrap();
        fs::write(root.join("src/components/A.vue"), "").unwrap();
        dir
    }

    #[test]
    fn test_clear_keeps_root() {
        let dir = populated();
        clear_tree(dir.path(), false).unwrap();
        assert!(dir.path().is_dir());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_clear_removes_root() {
        let dir = populated();
        let root = dir.path().join("src");
        clear_tree(&root, true).unwrap();
        assert!(!root.exists());
        assert!(dir.path().join("index.html").exists());
    }

    #[test]
    fn test_clear_missing_is_noop() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        clear_tree(&missing, false).unwrap();
        clear_tree(&missing, true).unwrap();
        assert!(!missing.exists());
    }

    #[test]
    fn test_clear_empty_directory() {
        let dir = TempDir::new().unwrap();
        clear_tree(dir.path(), false).unwrap();
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_clear_rejects_file() {
        let dir = populated();
        let err = clear_tree(&dir.path().join("index.html"), false).unwrap_err();
        assert!(err.is_io_error());
        assert!(dir.path().join("index.html").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_clear_does_not_follow_symlinks() {
        let outside = populated();
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

        clear_tree(dir.path(), false).unwrap();
        assert!(!dir.path().join("link").exists());
        assert!(outside.path().join("src/main.ts").exists());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
