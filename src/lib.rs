//! # Rust Handler Logger
//!
//! A leveled logging facade. Applications log at syslog-style severities
//! (`debug` through `emergency`, plus an unleveled print tier) against one
//! [`Logger`], which fans every record out to an ordered list of handlers.
//!
//! ## Features
//!
//! - **Composable handlers**: level-filtered and bare terminals, wrapped by
//!   JSON and context-enriching decorators
//! - **Configuration driven**: build the handler tree from [`LoggerOptions`]
//! - **Reloadable**: reopen file destinations after external rotation
//! - **Thread safe**: concurrent callers never interleave partial lines
//!
//! ```
//! use rust_handler_logger::prelude::*;
//!
//! let options = LoggerOptions::file("stderr", ["error", "critical"]).with_json(true);
//! let logger = Logger::from_options(&options).unwrap();
//!
//! logger.info(["not written"]);
//! logger.errorf("request {} failed", ["abc"]);
//! logger.close();
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Handler, HandlerKind, HandlerOptions, LevelSet, LogLevel, Logger, LoggerBuilder,
        LoggerError, LoggerOptions, Record, Result, TimestampFormat, Value,
    };
    pub use crate::handlers::{BareHandler, JsonHandler, LevelHandler, SmartHandler};
}

pub use crate::core::{
    compose, Handler, HandlerKind, HandlerOptions, LevelSet, LineFormat, LogLevel, Logger,
    LoggerBuilder, LoggerError, LoggerOptions, Record, RecordKind, Result, TimestampFormat, Value,
    render_template,
};
pub use handlers::{BareHandler, JsonHandler, LevelHandler, SmartHandler};
