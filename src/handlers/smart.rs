//! Smart decorator: adds time, call site and thread to each record

use crate::core::record::current_thread_label;
use crate::core::{Handler, Record, Result, TimestampFormat};
use chrono::Utc;

pub const TIME_FIELD: &str = "time";
pub const CALLER_FIELD: &str = "caller";
pub const THREAD_FIELD: &str = "thread";

/// Wraps one handler and enriches each record before forwarding it.
///
/// Adds `time`, `caller` (`file:line`, when the record carries a call site)
/// and `thread`. Fields the record already has are left alone. The shared
/// record is not touched; the inner handler receives an enriched copy.
///
/// Placed outside a [`JsonHandler`](super::JsonHandler), these fields end up
/// inside the structured payload. Placed inside one, they trail the frozen
/// payload as `key=value` pairs.
pub struct SmartHandler {
    inner: Box<dyn Handler>,
    name: String,
    timestamp_format: TimestampFormat,
}

impl SmartHandler {
    pub fn new(inner: Box<dyn Handler>) -> Self {
        let name = format!("smart({})", inner.name());
        Self {
            inner,
            name,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn inner(&self) -> &dyn Handler {
        self.inner.as_ref()
    }

    /// The record the inner handler will see
    pub fn enrich(&self, record: &Record) -> Record {
        let mut enriched = record
            .clone()
            .with_field(TIME_FIELD, self.timestamp_format.value(&Utc::now()));
        if let Some(caller) = record.caller() {
            enriched = enriched.with_field(
                CALLER_FIELD,
                format!("{}:{}", caller.file(), caller.line()),
            );
        }
        enriched.with_field(THREAD_FIELD, current_thread_label())
    }
}

impl Handler for SmartHandler {
    fn handle(&self, record: &Record) {
        self.inner.handle(&self.enrich(record));
    }

    fn reload(&self) -> Result<()> {
        self.inner.reload()
    }

    fn close(&self) {
        self.inner.close();
    }

    fn name(&self) -> &str {
        &self.name
    }
}
