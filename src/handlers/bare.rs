//! Unfiltered terminal handler

use super::destination::{open_target, Destination};
use super::terminal::Terminal;
use crate::core::{Handler, LineFormat, Record, Result};

/// Writes every record it receives, whatever its level.
pub struct BareHandler {
    terminal: Terminal,
}

impl BareHandler {
    pub fn new(destination: Box<dyn Destination>) -> Self {
        Self {
            terminal: Terminal::new("bare", destination),
        }
    }

    /// Open `target` (`stdout`, `stderr` or a file path)
    pub fn open(target: &str) -> Result<Self> {
        Ok(Self::new(open_target(target)?))
    }

    #[must_use]
    pub fn with_line_format(mut self, format: LineFormat) -> Self {
        self.terminal.set_format(format);
        self
    }

    pub fn target(&self) -> &str {
        self.terminal.target()
    }

    pub fn failed_writes(&self) -> u64 {
        self.terminal.failed_writes()
    }

    pub fn is_closed(&self) -> bool {
        self.terminal.is_closed()
    }
}

impl Handler for BareHandler {
    fn handle(&self, record: &Record) {
        self.terminal.write(record);
    }

    fn reload(&self) -> Result<()> {
        self.terminal.reload()
    }

    fn close(&self) {
        self.terminal.close();
    }

    fn name(&self) -> &str {
        self.terminal.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, Value};
    use crate::handlers::destination::MemoryDestination;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_accepts_every_level() {
        let dest = MemoryDestination::new();
        let buffer = dest.buffer();
        let handler = BareHandler::new(Box::new(dest));

        for level in LogLevel::LEVELED {
            handler.handle(&Record::new(level, "", vec![Value::from("x")]));
        }
        handler.handle(&Record::new(LogLevel::All, "", vec![Value::from("x")]));

        assert_eq!(buffer.len(), 9);
        assert_eq!(buffer.lines()[8], "x");
    }

    #[test]
    fn test_file_target() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bare.log");
        let handler = BareHandler::open(path.to_str().unwrap())?;

        handler.handle(&Record::new(LogLevel::Debug, "n={}", vec![Value::from(1)]));
        handler.close();

        assert_eq!(fs::read_to_string(&path)?, "[DEBUG] n=1\n");
        assert_eq!(handler.failed_writes(), 0);
        Ok(())
    }
}
