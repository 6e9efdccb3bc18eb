//! Wordlist output: one candidate per line, written atomically.

use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::WordforgeError;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "wordlist.txt";

/// Mode for a newly created wordlist (unix).
pub const NEW_FILE_MODE: u32 = 0o644;

/// Write each candidate followed by a newline.
pub fn write_lines<W: Write>(writer: W, candidates: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for candidate in candidates {
        writer.write_all(candidate.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write the list to `path`.
///
/// Lines go to a temporary file next to the target, which replaces the
/// target only once everything is flushed. On failure nothing is left at
/// `path`. A replaced file keeps its permissions; a new one gets
/// [`NEW_FILE_MODE`] rather than the temp file's owner-only mode.
pub fn write_wordlist(path: &Path, candidates: &[String]) -> Result<(), WordforgeError> {
    let write_err = |source: std::io::Error| WordforgeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    write_lines(tmp.as_file_mut(), candidates).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    set_output_permissions(tmp.as_file(), path).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!("Wrote {} candidates to {}", candidates.len(), path.display());
    Ok(())
}

#[cfg(unix)]
fn set_output_permissions(file: &std::fs::File, target: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match std::fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(_) => std::fs::Permissions::from_mode(NEW_FILE_MODE),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn set_output_permissions(_file: &std::fs::File, _target: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_lines_format() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &["Aswin1!".to_string(), "B@b".to_string()]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Aswin1!\nB@b\n");
    }

    #[test]
    fn test_write_wordlist_replaces_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale\n").unwrap();

        write_wordlist(&path, &["One!".to_string(), "Two@".to_string()]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "One!\nTwo@\n");
    }

    #[test]
    fn test_write_wordlist_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        write_wordlist(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_wordlist_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = write_wordlist(&path, &["x".to_string()]).unwrap_err();
        assert!(matches!(err, WordforgeError::Write { .. }));
        assert_eq!(err.exit_code(), 3);
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_wordlist_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let fresh = dir.path().join("fresh.txt");
        write_wordlist(&fresh, &["A!".to_string()]).unwrap();
        let mode = std::fs::metadata(&fresh).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, NEW_FILE_MODE);

        let existing = dir.path().join("existing.txt");
        std::fs::write(&existing, "old\n").unwrap();
        std::fs::set_permissions(&existing, std::fs::Permissions::from_mode(0o640)).unwrap();
        write_wordlist(&existing, &["B@".to_string()]).unwrap();
        let mode = std::fs::metadata(&existing).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640, "replaced file keeps its mode");
    }
}
