//! Whole-file text reads and writes.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// How `write_file` treats an existing file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Truncate,
    Append,
}

/// Create any missing parent directories of `path`.
pub fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| Error::io_at(parent, err))?;
        }
    }
    Ok(())
}

/// Read the entire file as UTF-8 text.
///
/// `\r\n` and lone `\r` line endings are read as `\n`.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|err| Error::io_at(path, err))?;
    let content = normalize_newlines(raw);
    debug!(path = %path.display(), bytes = content.len(), "read file");
    Ok(content)
}

/// Write `content` to `path`, creating parent directories first.
pub fn write_file(path: impl AsRef<Path>, content: &str, mode: WriteMode) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dirs(path)?;

    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Truncate => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };
    let mut file = options.open(path).map_err(|err| Error::io_at(path, err))?;
    file.write_all(content.as_bytes())
        .map_err(|err| Error::io_at(path, err))?;

    debug!(path = %path.display(), bytes = content.len(), ?mode, "wrote file");
    Ok(())
}

/// Append `content` to `path`, creating the file if needed.
pub fn append_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    write_file(path, content, WriteMode::Append)
}

fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_then_append_then_read() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("greeting.txt");
        write_file(&path, "hello", WriteMode::default())?;
        assert_eq!(read_file(&path)?, "hello");
        append_file(&path, " world")?;
        assert_eq!(read_file(&path)?, "hello world");
        Ok(())
    }

    #[test]
    fn truncate_overwrites_previous_content() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("notes.txt");
        write_file(&path, "a much longer first draft", WriteMode::Truncate)?;
        write_file(&path, "short", WriteMode::Truncate)?;
        assert_eq!(read_file(&path)?, "short");
        Ok(())
    }

    #[test]
    fn creates_missing_parent_directories() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("a/b/c/out.txt");
        append_file(&path, "x")?;
        assert!(dir.path().join("a/b/c").is_dir());
        assert_eq!(read_file(&path)?, "x");
        Ok(())
    }

    #[test]
    fn bare_file_name_needs_no_parent() -> Result<()> {
        ensure_parent_dirs(Path::new("plain.txt"))?;
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error_with_path() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("absent.txt");
        match read_file(&path) {
            Err(Error::Io {
                path: Some(p),
                source,
            }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected I/O error, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn carriage_returns_read_as_newlines() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("crlf.txt");
        fs::write(&path, "a\r\nb\rc\n\r\n")?;
        assert_eq!(read_file(&path)?, "a\nb\nc\n\n");
        Ok(())
    }

    #[test]
    fn invalid_utf8_is_io_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00])?;
        assert!(matches!(read_file(&path), Err(Error::Io { .. })));
        Ok(())
    }

    #[test]
    fn writing_into_a_file_as_directory_fails() -> Result<()> {
        let dir = tempdir()?;
        let blocker = dir.path().join("blocker");
        write_file(&blocker, "", WriteMode::Truncate)?;
        let result = write_file(blocker.join("child.txt"), "x", WriteMode::Truncate);
        assert!(matches!(result, Err(Error::Io { .. })));
        Ok(())
    }
}
