//! Logger configuration
//!
//! The option shapes consumed by [`compose`](super::composer::compose).
//! Everything deserializes with `serde`, so options can live in a JSON
//! config file:
//!
//! ```
//! use rust_handler_logger::{HandlerKind, LoggerOptions};
//!
//! let options = LoggerOptions::from_json(r#"{
//!     "kind": "multi",
//!     "handlers": [
//!         { "file": "/var/log/app/error.log", "levels": ["error", "critical"] },
//!         { "file": "/var/log/app/info.log",  "levels": ["info", "notice"] }
//!     ],
//!     "json": true
//! }"#).unwrap();
//!
//! assert_eq!(options.kind, HandlerKind::Multi);
//! assert_eq!(options.handlers.len(), 2);
//! assert!(!options.prevent_smart);
//! ```

use super::error::{LoggerError, Result};
use super::log_level::LevelSet;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Which terminal handlers to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    /// No handlers; every call is a no-op
    #[default]
    None,
    /// One level-filtered terminal on `file`
    File,
    /// One unfiltered terminal on `file`
    Bare,
    /// One level-filtered terminal per entry in `handlers`
    Multi,
}

/// One (destination, level subset) pair of a multi-handler configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerOptions {
    pub file: String,
    pub levels: Vec<String>,
}

impl HandlerOptions {
    pub fn new<I, S>(file: impl Into<String>, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            file: file.into(),
            levels: levels.into_iter().map(Into::into).collect(),
        }
    }

    /// Parsed level names. An empty list accepts every level.
    pub fn level_set(&self) -> Result<LevelSet> {
        LevelSet::from_names(&self.levels)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    #[serde(alias = "type")]
    pub kind: HandlerKind,
    /// Target for `file` and `bare`: a path, `stdout` or `stderr`
    pub file: String,
    /// Accepted levels for `file`
    pub levels: Vec<String>,
    /// Terminals for `multi`, in fan-out order
    pub handlers: Vec<HandlerOptions>,
    /// Skip the smart decorator
    pub prevent_smart: bool,
    /// Wrap every terminal with the JSON decorator
    pub json: bool,
    /// Format of the smart decorator's `time` field
    pub timestamp_format: TimestampFormat,
}

impl LoggerOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// A single level-filtered terminal
    pub fn file<I, S>(file: impl Into<String>, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: HandlerKind::File,
            file: file.into(),
            levels: levels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// A single unfiltered terminal
    pub fn bare(file: impl Into<String>) -> Self {
        Self {
            kind: HandlerKind::Bare,
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn multi(handlers: Vec<HandlerOptions>) -> Self {
        Self {
            kind: HandlerKind::Multi,
            handlers,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    #[must_use]
    pub fn with_prevent_smart(mut self, prevent_smart: bool) -> Self {
        self.prevent_smart = prevent_smart;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Parsed level names for the `file` kind
    pub fn level_set(&self) -> Result<LevelSet> {
        LevelSet::from_names(&self.levels)
    }

    /// Check shape and level names without touching any destination
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            HandlerKind::None => Ok(()),
            HandlerKind::File => {
                require_target("file", &self.file)?;
                self.level_set().map(|_| ())
            }
            HandlerKind::Bare => require_target("bare", &self.file),
            HandlerKind::Multi => {
                for (idx, handler) in self.handlers.iter().enumerate() {
                    require_target(&format!("handlers[{}]", idx), &handler.file)?;
                    handler.level_set()?;
                }
                Ok(())
            }
        }
    }
}

fn require_target(component: &str, target: &str) -> Result<()> {
    if target.trim().is_empty() {
        return Err(LoggerError::config(component, "missing destination"));
    }
    Ok(())
}
