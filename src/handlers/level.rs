//! Level-filtered terminal handler

use super::destination::{open_target, Destination};
use super::terminal::Terminal;
use crate::core::{Handler, LevelSet, LineFormat, Record, Result};

/// Writes only records whose level is in the configured set, plus every
/// print-tier record. Everything else is dropped without a trace.
///
/// # Examples
///
/// ```
/// use rust_handler_logger::handlers::{LevelHandler, MemoryDestination};
/// use rust_handler_logger::{Handler, LevelSet, LogLevel, Record, Value};
///
/// let dest = MemoryDestination::new();
/// let buffer = dest.buffer();
/// let handler = LevelHandler::new(
///     Box::new(dest),
///     LevelSet::empty().with(LogLevel::Error),
/// );
///
/// handler.handle(&Record::new(LogLevel::Info, "", vec![Value::from("skipped")]));
/// handler.handle(&Record::new(LogLevel::Error, "", vec![Value::from("kept")]));
/// assert_eq!(buffer.lines(), vec!["[ERROR] kept"]);
/// ```
pub struct LevelHandler {
    terminal: Terminal,
    levels: LevelSet,
}

impl LevelHandler {
    pub fn new(destination: Box<dyn Destination>, levels: LevelSet) -> Self {
        Self {
            terminal: Terminal::new("level", destination),
            levels,
        }
    }

    /// Open `target` (`stdout`, `stderr` or a file path) and filter by `levels`
    pub fn open(target: &str, levels: LevelSet) -> Result<Self> {
        Ok(Self::new(open_target(target)?, levels))
    }

    #[must_use]
    pub fn with_line_format(mut self, format: LineFormat) -> Self {
        self.terminal.set_format(format);
        self
    }

    pub fn levels(&self) -> LevelSet {
        self.levels
    }

    pub fn target(&self) -> &str {
        self.terminal.target()
    }

    /// Number of accepted records the destination failed to write
    pub fn failed_writes(&self) -> u64 {
        self.terminal.failed_writes()
    }

    pub fn is_closed(&self) -> bool {
        self.terminal.is_closed()
    }
}

impl Handler for LevelHandler {
    fn handle(&self, record: &Record) {
        if self.levels.accepts(record.level()) {
            self.terminal.write(record);
        }
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
