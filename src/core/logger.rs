//! Logger facade

use super::{
    composer::{compose, decorate, Decoration},
    error::Result,
    handler::Handler,
    log_level::{LevelSet, LogLevel},
    options::LoggerOptions,
    record::Record,
    timestamp::TimestampFormat,
    value::Value,
};
use crate::handlers::{BareHandler, LevelHandler};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe, Location};

/// The handle applications log through.
///
/// Each call builds one [`Record`] and hands it to every handler in the
/// order they were added. Calls are synchronous: when a method returns,
/// every handler has seen the record. Logging methods never fail; a
/// handler that panics is reported on stderr and the remaining handlers
/// still run.
///
/// # Example
///
/// ```
/// use rust_handler_logger::prelude::*;
/// use rust_handler_logger::handlers::{LevelHandler, MemoryDestination};
///
/// let dest = MemoryDestination::new();
/// let buffer = dest.buffer();
///
/// let mut logger = Logger::null();
/// logger.add_handler(Box::new(LevelHandler::new(Box::new(dest), LevelSet::all())));
///
/// logger.info(["server started"]);
/// logger.warningf("disk at {}%", [91]);
/// assert_eq!(buffer.lines(), vec!["[INFO] server started", "[WARNING] disk at 91%"]);
/// ```
pub struct Logger {
    handlers: Vec<Box<dyn Handler>>,
}

impl Logger {
    /// A logger with no handlers. Every call is a no-op until handlers are added.
    #[must_use]
    pub fn null() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Build the handler tree described by `options`
    pub fn from_options(options: &LoggerOptions) -> Result<Self> {
        Ok(Self {
            handlers: compose(options)?,
        })
    }

    pub fn add_handler(&mut self, handler: Box<dyn Handler>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Names of the top-level handlers, e.g. `smart(json(level))`
    pub fn handler_names(&self) -> Vec<String> {
        self.handlers.iter().map(|h| h.name().to_string()).collect()
    }

    /// Build a record at `level` and fan it out. An empty `format` joins
    /// the arguments with spaces.
    #[track_caller]
    pub fn log<I, V>(&self, level: LogLevel, format: &str, args: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        if self.handlers.is_empty() {
            return;
        }
        let record = Record::new(level, format, args.into_iter().map(Into::into).collect())
            .with_caller(Location::caller());
        self.log_record(&record);
    }

    /// Fan a prebuilt record out to every handler
    pub fn log_record(&self, record: &Record) {
        for (idx, handler) in self.handlers.iter().enumerate() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| handler.handle(record)));
            if let Err(panic_info) = result {
                eprintln!(
                    "[LOGGER CRITICAL] Handler #{} ('{}') panicked: {}. \
                     Other handlers continue to function.",
                    idx,
                    handler.name(),
                    panic_message(&*panic_info)
                );
            }
        }
    }

    /// Reload every handler in order, stopping at the first failure.
    ///
    /// Handlers before the failing one stay reloaded; handlers after it are
    /// not touched in this call.
    pub fn reload(&self) -> Result<()> {
        for handler in &self.handlers {
            handler.reload()?;
        }
        Ok(())
    }

    /// Release every handler. Best-effort: problems are reported on stderr,
    /// every handler is closed regardless, and calling this twice is harmless.
    pub fn close(&self) {
        for (idx, handler) in self.handlers.iter().enumerate() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| handler.close()));
            if let Err(panic_info) = result {
                eprintln!(
                    "[LOGGER ERROR] Handler #{} ('{}') panicked during close: {}",
                    idx,
                    handler.name(),
                    panic_message(&*panic_info)
                );
            }
        }
    }

    // Print tier: one operation under three names, always delivered.

    #[track_caller]
    pub fn print<I, V>(&self, args: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.log(LogLevel::All, "", args);
    }

    #[track_caller]
    pub fn println<I, V>(&self, args: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.log(LogLevel::All, "", args);
    }

    #[track_caller]
    pub fn printf<I, V>(&self, format: &str, args: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.log(LogLevel::All, format, args);
    }
}

macro_rules! level_methods {
    ($($(#[$doc:meta])* $level:ident => $plain:ident, $formatted:ident;)+) => {
        impl Logger {
            $(
                $(#[$doc])*
                #[track_caller]
                #[inline]
                pub fn $plain<I, V>(&self, args: I)
                where
                    I: IntoIterator<Item = V>,
                    V: Into<Value>,
                {
                    self.log(LogLevel::$level, "", args);
                }

                #[doc = concat!("Like [`Logger::", stringify!($plain), "`], filling `{}` placeholders in `format`.")]
                #[track_caller]
                #[inline]
                pub fn $formatted<I, V>(&self, format: &str, args: I)
                where
                    I: IntoIterator<Item = V>,
                    V: Into<Value>,
                {
                    self.log(LogLevel::$level, format, args);
                }
            )+
        }
    };
}

level_methods! {
    /// Diagnostic detail for developers
    Debug => debug, debugf;
    /// Routine operational messages
    Info => info, infof;
    /// Normal but significant conditions
    Notice => notice, noticef;
    /// Something unexpected that did not stop the operation
    Warning => warning, warningf;
    /// An operation failed
    Error => error, errorf;
    /// A component is failing
    Critical => critical, criticalf;
    /// Action must be taken immediately
    Alert => alert, alertf;
    /// System is unusable
    Emergency => emergency, emergencyf;
}

impl Default for Logger {
    fn default() -> Self {
        Self::null()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

enum Branch {
    Level { target: String, levels: LevelSet },
    Bare { target: String },
    Ready(Box<dyn Handler>),
}

/// Builder for constructing a Logger with a fluent API
///
/// Destinations are opened in `build`, in the order they were added, and
/// the same decoration policy as [`Logger::from_options`] is applied to
/// every handler: JSON innermost, smart outermost.
///
/// # Example
/// ```
/// use rust_handler_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level_target("stderr", LevelSet::at_least(LogLevel::Warning))
///     .bare_target("stdout")
///     .json(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.handler_names(), vec!["smart(json(level))", "smart(json(bare))"]);
/// ```
pub struct LoggerBuilder {
    branches: Vec<Branch>,
    decoration: Decoration,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            branches: Vec::new(),
            decoration: Decoration::default(),
        }
    }

    /// Add a level-filtered terminal on `target`
    #[must_use = "builder methods return a new value"]
    pub fn level_target(mut self, target: impl Into<String>, levels: LevelSet) -> Self {
        self.branches.push(Branch::Level {
            target: target.into(),
            levels,
        });
        self
    }

    /// Add an unfiltered terminal on `target`
    #[must_use = "builder methods return a new value"]
    pub fn bare_target(mut self, target: impl Into<String>) -> Self {
        self.branches.push(Branch::Bare {
            target: target.into(),
        });
        self
    }

    /// Add an already constructed handler; it is decorated like the others
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.branches.push(Branch::Ready(Box::new(handler)));
        self
    }

    /// Wrap every handler with the JSON decorator
    #[must_use = "builder methods return a new value"]
    pub fn json(mut self, enabled: bool) -> Self {
        self.decoration.json = enabled;
        self
    }

    /// Skip the smart decorator
    #[must_use = "builder methods return a new value"]
    pub fn prevent_smart(mut self, prevent: bool) -> Self {
        self.decoration.smart = !prevent;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.decoration.timestamp_format = format;
        self
    }

    /// Open every destination and assemble the logger
    pub fn build(self) -> Result<Logger> {
        let mut terminals: Vec<Box<dyn Handler>> = Vec::with_capacity(self.branches.len());
        for branch in self.branches {
            let handler: Box<dyn Handler> = match branch {
                Branch::Level { target, levels } => Box::new(LevelHandler::open(&target, levels)?),
                Branch::Bare { target } => Box::new(BareHandler::open(&target)?),
                Branch::Ready(handler) => handler,
            };
            terminals.push(handler);
        }

        Ok(Logger {
            handlers: decorate(terminals, &self.decoration),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
