//! Destination ownership shared by the two terminal handlers

use super::destination::Destination;
use crate::core::{LineFormat, LoggerError, Record, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Serializes access to one destination and absorbs write failures.
///
/// `None` in the slot means the terminal was closed.
pub(crate) struct Terminal {
    name: &'static str,
    target: String,
    destination: Mutex<Option<Box<dyn Destination>>>,
    format: LineFormat,
    failed_writes: AtomicU64,
}

impl Terminal {
    pub(crate) fn new(name: &'static str, destination: Box<dyn Destination>) -> Self {
        Self {
            name,
            target: destination.target().to_string(),
            destination: Mutex::new(Some(destination)),
            format: LineFormat::default(),
            failed_writes: AtomicU64::new(0),
        }
    }

    pub(crate) fn set_format(&mut self, format: LineFormat) {
        self.format = format;
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn target(&self) -> &str {
        &self.target
    }

    pub(crate) fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.destination.lock().is_none()
    }

    pub(crate) fn write(&self, record: &Record) {
        let line = self.format.render(record);
        let mut slot = self.destination.lock();
        let Some(destination) = slot.as_mut() else {
            return;
        };
        if let Err(e) = destination.write_line(&line) {
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
            eprintln!(
                "[LOGGER ERROR] Handler '{}' failed to write to '{}': {}",
                self.name, self.target, e
            );
        }
    }

    pub(crate) fn reload(&self) -> Result<()> {
        let mut slot = self.destination.lock();
        match slot.as_mut() {
            Some(destination) => destination.reopen(),
            None => Err(LoggerError::handler_closed(self.name)),
        }
    }

    pub(crate) fn close(&self) {
        let Some(mut destination) = self.destination.lock().take() else {
            return;
        };
        if let Err(e) = destination.flush() {
            eprintln!(
                "[LOGGER ERROR] Handler '{}' failed to flush '{}' on close: {}",
                self.name, self.target, e
            );
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Ensure everything reaches the destination even without close()
        self.close();
    }
}
