//! Handler implementations
//!
//! Terminals ([`LevelHandler`], [`BareHandler`]) own a [`Destination`];
//! decorators ([`JsonHandler`], [`SmartHandler`]) own one inner handler.

pub mod bare;
pub mod destination;
pub mod json;
pub mod level;
pub mod smart;
mod terminal;

pub use bare::BareHandler;
pub use destination::{
    open_target, ConsoleDestination, Destination, FileDestination, MemoryBuffer,
    MemoryDestination,
};
pub use json::JsonHandler;
pub use level::LevelHandler;
pub use smart::SmartHandler;

pub use crate::core::Handler;
