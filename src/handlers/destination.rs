//! Write targets owned by terminal handlers
//!
//! A destination receives fully rendered lines. It knows nothing about
//! levels or records; filtering and rendering happen in the terminal.

use crate::core::{LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Physical output for one terminal handler.
pub trait Destination: Send {
    /// Write one line; the destination appends the newline.
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    /// Re-acquire the underlying resource. On failure the previous resource
    /// must remain usable.
    fn reopen(&mut self) -> Result<()>;
    /// Identifier used in diagnostics, e.g. the file path.
    fn target(&self) -> &str;
}

/// Open a destination by target string: `stdout`, `stderr`, or a file path.
pub fn open_target(target: &str) -> Result<Box<dyn Destination>> {
    match target {
        "stdout" => Ok(Box::new(ConsoleDestination::stdout())),
        "stderr" => Ok(Box::new(ConsoleDestination::stderr())),
        "" => Err(LoggerError::config("destination", "empty target")),
        path => Ok(Box::new(FileDestination::open(path)?)),
    }
}

/// Append-mode file that can be reopened after external rotation.
pub struct FileDestination {
    path: PathBuf,
    target: String,
    file: File,
}

impl FileDestination {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = Self::open_file(&path)?;
        Ok(Self {
            target: path.display().to_string(),
            path,
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_file(path: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })
    }
}

impl Destination for FileDestination {
    fn write_line(&mut self, line: &str) -> Result<()> {
        // One write per line so concurrent writers never split a record
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.file.write_all(buf.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    fn reopen(&mut self) -> Result<()> {
        let file = Self::open_file(&self.path)?;
        if let Err(e) = self.file.flush() {
            eprintln!(
                "[LOGGER ERROR] Failed to flush '{}' before reopening: {}",
                self.target, e
            );
        }
        self.file = file;
        Ok(())
    }

    fn target(&self) -> &str {
        &self.target
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Process stdout or stderr. Reopening is a no-op.
pub struct ConsoleDestination {
    stream: Stream,
}

impl ConsoleDestination {
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl Destination for ConsoleDestination {
    fn write_line(&mut self, line: &str) -> Result<()> {
        match self.stream {
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            Stream::Stdout => std::io::stdout().flush()?,
            Stream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn reopen(&mut self) -> Result<()> {
        Ok(())
    }

    fn target(&self) -> &str {
        match self.stream {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

/// Shared view of the lines captured by a [`MemoryDestination`].
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    lines: Arc<Mutex<Vec<String>>>,
    reopens: Arc<Mutex<usize>>,
}

impl MemoryBuffer {
    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    /// How many times the owning destination was reopened
    pub fn reopen_count(&self) -> usize {
        *self.reopens.lock()
    }
}

/// Captures lines in memory. Useful in tests and for inspecting output
/// programmatically.
#[derive(Debug, Default)]
pub struct MemoryDestination {
    buffer: MemoryBuffer,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for reading captured lines after the destination is moved
    /// into a handler.
    pub fn buffer(&self) -> MemoryBuffer {
        self.buffer.clone()
    }
}

impl Destination for MemoryDestination {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.buffer.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn reopen(&mut self) -> Result<()> {
        *self.buffer.reopens.lock() += 1;
        Ok(())
    }

    fn target(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_destination_appends_lines() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.log");

        let mut dest = FileDestination::open(&path)?;
        dest.write_line("first")?;
        dest.write_line("second")?;
        dest.flush()?;

        assert_eq!(fs::read_to_string(&path)?, "first\nsecond\n");
        assert_eq!(dest.target(), path.display().to_string());
        Ok(())
    }

    #[test]
    fn test_file_destination_reopen_after_rotation() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.log");
        let rotated = dir.path().join("app.log.1");

        let mut dest = FileDestination::open(&path)?;
        dest.write_line("before")?;
        fs::rename(&path, &rotated)?;

        dest.reopen()?;
        dest.write_line("after")?;

        assert_eq!(fs::read_to_string(&rotated)?, "before\n");
        assert_eq!(fs::read_to_string(&path)?, "after\n");
        Ok(())
    }

    #[test]
    fn test_failed_reopen_keeps_previous_file() -> Result<()> {
        let dir = tempdir()?;
        let sub = dir.path().join("sub");
        fs::create_dir(&sub)?;
        let path = sub.join("app.log");

        let mut dest = FileDestination::open(&path)?;
        fs::remove_dir_all(&sub)?;

        let err = dest.reopen().unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(dest.write_line("still writable").is_ok());
        Ok(())
    }

    #[test]
    fn test_open_target_rejects_missing_directory() {
        let result = open_target("/nonexistent-dir-for-logger-tests/app.log");
        assert!(result.is_err());
        assert!(open_target("").is_err());
    }

    #[test]
    fn test_open_target_console() -> Result<()> {
        assert_eq!(open_target("stdout")?.target(), "stdout");
        assert_eq!(open_target("stderr")?.target(), "stderr");
        Ok(())
    }

    #[test]
    fn test_memory_destination() -> Result<()> {
        let mut dest = MemoryDestination::new();
        let buffer = dest.buffer();

        dest.write_line("one")?;
        dest.reopen()?;
        dest.write_line("two")?;

        assert_eq!(buffer.lines(), vec!["one", "two"]);
        assert_eq!(buffer.reopen_count(), 1);
        buffer.clear();
        assert!(buffer.is_empty());
        Ok(())
    }
}
