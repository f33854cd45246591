//! Core logger types and traits

pub mod composer;
pub mod error;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod output_format;
pub mod record;
pub mod timestamp;
pub mod value;

pub use composer::{build_terminals, compose, decorate, Decoration};
pub use error::{LoggerError, Result};
pub use handler::Handler;
pub use log_level::{LevelSet, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use options::{HandlerKind, HandlerOptions, LoggerOptions};
pub use output_format::LineFormat;
pub use record::{render_template, Record, RecordKind};
pub use timestamp::TimestampFormat;
pub use value::Value;
