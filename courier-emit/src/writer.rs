//! Output writer.
//!
//! Write protocol: ensure the parent directory exists → write to
//! `<path>.courier.tmp` → rename to the final path (atomic on POSIX).
//! The tmp file is removed if the rename fails.

use std::path::{Path, PathBuf};

use crate::error::{io_err, EmitError};

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written with the converted content.
    Written { path: PathBuf },
    /// Dry-run mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

/// Write one converted output, overwriting any previous content.
pub fn write_output(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, EmitError> {
    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let tmp = PathBuf::from(format!("{}.courier.tmp", path.display()));
    std::fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::debug!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn writes_content_to_new_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.html");
        let result = write_output(&path, "<html></html>", false).unwrap();
        assert!(matches!(result, WriteResult::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sub").join("deep").join("a.html");
        write_output(&path, "out", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn overwrites_previous_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.html");
        write_output(&path, "v1", false).unwrap();
        write_output(&path, "v2", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.html");
        write_output(&path, "out", false).unwrap();
        let tmp_path = PathBuf::from(format!("{}.courier.tmp", path.display()));
        assert!(!tmp_path.exists(), ".courier.tmp must be cleaned up");
    }

    #[test]
    fn dry_run_does_not_touch_the_filesystem() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sub").join("a.html");
        let result = write_output(&path, "out", true).unwrap();
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!path.exists(), "dry-run must not create files");
        assert!(!tmp.path().join("sub").exists(), "dry-run must not create directories");
    }

    #[test]
    #[cfg(unix)]
    fn rename_failure_cleans_tmp_and_keeps_original() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let dir = root.path().join("readonly");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("a.html");
        fs::write(&path, "original").unwrap();

        // tmp write succeeds (file create is blocked too in a 0o555 dir, so
        // pre-create the tmp path before locking the directory down)
        let tmp_path = PathBuf::from(format!("{}.courier.tmp", path.display()));
        fs::write(&tmp_path, "").unwrap();

        let mut perms = fs::metadata(&dir).unwrap().permissions();
        perms.set_mode(0o555);
        fs::set_permissions(&dir, perms).unwrap();

        let err = write_output(&path, "new content", false).unwrap_err();
        assert!(matches!(err, EmitError::Io { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");

        let mut perms = fs::metadata(&dir).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&dir, perms).unwrap();
    }
}
