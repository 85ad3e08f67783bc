//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Read a UTF-8 text file into memory.
///
/// Missing files, permission failures and invalid UTF-8 each map to their
/// own error code; anything else becomes `internal.io_error`.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| map_io_error(path, "read", e))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::file_encoding(path.display().to_string(), e.to_string()))
}

/// Overwrite a file with `content`.
///
/// Truncates then writes in place. Not atomic: a failure partway through can
/// leave the file truncated.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| map_io_error(path, "write", e))
}

fn map_io_error(path: &Path, operation: &str, err: io::Error) -> Error {
    let display = path.display().to_string();
    match err.kind() {
        io::ErrorKind::NotFound => Error::file_not_found(display, operation),
        io::ErrorKind::PermissionDenied => {
            Error::file_access_denied(display, operation, err.to_string())
        }
        io::ErrorKind::StorageFull => Error::file_disk_full(display, err.to_string()),
        _ => Error::internal_io(err.to_string(), Some(format!("{} {}", operation, display))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_text_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "effect: () => {{}}").unwrap();

        let content = read_text(temp.path()).unwrap();
        assert_eq!(content, "effect: () => {}");
    }

    #[test]
    fn read_text_returns_not_found_for_missing_file() {
        let err = read_text(Path::new("/nonexistent/events.js")).unwrap_err();
        assert_eq!(err.code.as_str(), "file.not_found");
        assert_eq!(err.details["operation"], "read");
    }

    #[test]
    fn read_text_rejects_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = read_text(temp.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "file.encoding_error");
    }

    #[test]
    fn write_text_replaces_longer_content() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "a much longer original body").unwrap();

        write_text(temp.path(), "short").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "short");
    }

    #[test]
    fn write_text_returns_error_for_missing_directory() {
        let err = write_text(Path::new("/nonexistent/dir/events.js"), "content").unwrap_err();
        assert_eq!(err.code.as_str(), "file.not_found");
        assert_eq!(err.details["operation"], "write");
    }

    #[cfg(unix)]
    #[test]
    fn read_text_reports_access_denied() {
        use std::os::unix::fs::PermissionsExt;

        let temp = NamedTempFile::new().unwrap();
        fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users ignore mode bits.
        if fs::read(temp.path()).is_ok() {
            return;
        }

        let err = read_text(temp.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "file.access_denied");
    }

    #[test]
    fn write_permission_failure_maps_to_access_denied() {
        let err = map_io_error(
            Path::new("events.js"),
            "write",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );

        assert_eq!(err.code.as_str(), "file.access_denied");
        assert_eq!(err.details["operation"], "write");
        assert_eq!(err.details["path"], "events.js");
    }

    #[test]
    fn write_storage_full_maps_to_disk_full() {
        let err = map_io_error(
            Path::new("events.js"),
            "write",
            io::Error::from(io::ErrorKind::StorageFull),
        );

        assert_eq!(err.code.as_str(), "file.disk_full");
        assert_eq!(err.details["operation"], "write");
        assert!(!err.hints.is_empty());
    }

    #[test]
    fn other_write_failures_map_to_internal_io() {
        let err = map_io_error(
            Path::new("events.js"),
            "write",
            io::Error::from(io::ErrorKind::Interrupted),
        );

        assert_eq!(err.code.as_str(), "internal.io_error");
        assert_eq!(err.details["context"], "write events.js");
    }

    #[cfg(unix)]
    #[test]
    fn write_text_reports_access_denied_for_read_only_target() {
        use std::os::unix::fs::PermissionsExt;

        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "window.Game").unwrap();
        fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o444)).unwrap();

        // Privileged users ignore mode bits.
        if fs::OpenOptions::new().write(true).open(temp.path()).is_ok() {
            return;
        }

        let err = write_text(temp.path(), "Game").unwrap_err();
        assert_eq!(err.code.as_str(), "file.access_denied");
        assert_eq!(err.details["operation"], "write");
        assert_eq!(fs::read_to_string(temp.path()).unwrap(), "window.Game");
    }
}
