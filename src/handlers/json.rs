//! Structuring decorator: re-encodes records as JSON objects

use crate::core::{Handler, Record, Result};
use serde_json::{Map, Value as JsonValue};

const RESERVED_KEYS: [&str; 4] = ["level", "message", "args", "format"];

/// Wraps one handler and hands it a structured record in place of the
/// original template and arguments.
///
/// The payload is a single-line JSON object with `level` (absent for the
/// print tier), `message`, `args`, `format` (only when a template was used)
/// and every context field at top level. Fields never overwrite the
/// reserved keys. The record's level is unchanged, so downstream filtering
/// sees exactly what it would have seen without this decorator.
pub struct JsonHandler {
    inner: Box<dyn Handler>,
    name: String,
}

impl JsonHandler {
    pub fn new(inner: Box<dyn Handler>) -> Self {
        let name = format!("json({})", inner.name());
        Self { inner, name }
    }

    pub fn inner(&self) -> &dyn Handler {
        self.inner.as_ref()
    }

    /// Build the structured payload for `record`
    pub fn to_payload(record: &Record) -> JsonValue {
        let mut payload = Map::new();

        for (key, value) in record.fields() {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                payload.insert(key.clone(), value.to_json_value());
            }
        }

        if record.level().is_leveled() {
            payload.insert(
                "level".to_string(),
                JsonValue::String(record.level().to_str().to_string()),
            );
        }
        payload.insert("message".to_string(), JsonValue::String(record.message()));
        payload.insert(
            "args".to_string(),
            JsonValue::Array(record.args().iter().map(|a| a.to_json_value()).collect()),
        );
        if !record.format().is_empty() {
            payload.insert(
                "format".to_string(),
                JsonValue::String(record.format().to_string()),
            );
        }

        JsonValue::Object(payload)
    }
}

impl Handler for JsonHandler {
    fn handle(&self, record: &Record) {
        let mut structured = Record::structured(record.level(), Self::to_payload(record));
        if let Some(caller) = record.caller() {
            structured = structured.with_caller(caller);
        }
        self.inner.handle(&structured);
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
