//! Building handler trees from configuration
//!
//! Terminals are built first, in declaration order. If JSON output is
//! requested every terminal is wrapped in a [`JsonHandler`]; then, unless
//! suppressed, every resulting handler is wrapped in a [`SmartHandler`].
//! The order is a logger-wide policy: smart is always outermost, so its
//! fields are part of the JSON payload.

use super::error::Result;
use super::handler::Handler;
use super::options::{HandlerKind, LoggerOptions};
use super::timestamp::TimestampFormat;
use crate::handlers::{BareHandler, JsonHandler, LevelHandler, SmartHandler};

/// Decorators applied uniformly to every top-level handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub json: bool,
    pub smart: bool,
    pub timestamp_format: TimestampFormat,
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            json: false,
            smart: true,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl From<&LoggerOptions> for Decoration {
    fn from(options: &LoggerOptions) -> Self {
        Self {
            json: options.json,
            smart: !options.prevent_smart,
            timestamp_format: options.timestamp_format.clone(),
        }
    }
}

/// Build the complete handler list described by `options`.
///
/// Fails if a level name is unknown or a destination cannot be opened.
/// Terminals opened before the failure are closed when dropped.
pub fn compose(options: &LoggerOptions) -> Result<Vec<Box<dyn Handler>>> {
    options.validate()?;
    let terminals = build_terminals(options)?;
    Ok(decorate(terminals, &Decoration::from(options)))
}

/// Step one: the terminals alone
pub fn build_terminals(options: &LoggerOptions) -> Result<Vec<Box<dyn Handler>>> {
    let mut handlers: Vec<Box<dyn Handler>> = Vec::new();

    match options.kind {
        HandlerKind::None => {}
        HandlerKind::File => {
            handlers.push(Box::new(LevelHandler::open(
                &options.file,
                options.level_set()?,
            )?));
        }
        HandlerKind::Bare => {
            handlers.push(Box::new(BareHandler::open(&options.file)?));
        }
        HandlerKind::Multi => {
            for handler in &options.handlers {
                handlers.push(Box::new(LevelHandler::open(
                    &handler.file,
                    handler.level_set()?,
                )?));
            }
        }
    }

    Ok(handlers)
}

/// Steps two and three: JSON first, then smart, each over every handler
pub fn decorate(handlers: Vec<Box<dyn Handler>>, decoration: &Decoration) -> Vec<Box<dyn Handler>> {
    let mut handlers = handlers;

    if decoration.json {
        handlers = handlers
            .into_iter()
            .map(|h| Box::new(JsonHandler::new(h)) as Box<dyn Handler>)
            .collect();
    }

    if decoration.smart {
        handlers = handlers
            .into_iter()
            .map(|h| {
                Box::new(
                    SmartHandler::new(h).with_timestamp_format(decoration.timestamp_format.clone()),
                ) as Box<dyn Handler>
            })
            .collect();
    }

    handlers
}
