//! Line rendering for terminal handlers
//!
//! Text records become `[LEVEL] message key=value ...`; print-tier records
//! carry no level label. Structured records are written as their encoded
//! payload, followed by any fields attached after encoding.

use super::record::{sanitize_message, Record, RecordKind};
use super::value::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFormat {
    use_colors: bool,
}

impl LineFormat {
    #[must_use]
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Colored level labels. Without the `console` feature this is plain text.
    #[must_use]
    pub fn colored() -> Self {
        Self { use_colors: true }
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    /// Render one record as a single line, without the trailing newline
    pub fn render(&self, record: &Record) -> String {
        let mut line = match record.kind() {
            RecordKind::Text if record.level().is_leveled() => {
                format!("[{}] {}", self.level_label(record), record.message())
            }
            RecordKind::Text | RecordKind::Structured => record.message(),
        };

        for (key, value) in record.fields() {
            line.push(' ');
            line.push_str(&format_field(key, value));
        }

        line
    }

    #[cfg(feature = "console")]
    fn level_label(&self, record: &Record) -> String {
        use colored::Colorize;
        let level = record.level();
        if self.use_colors {
            level.to_str().color(level.color_code()).to_string()
        } else {
            level.to_str().to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_label(&self, record: &Record) -> String {
        record.level().to_str().to_string()
    }
}

/// `key=value`, quoting values that contain whitespace, quotes or `=`
fn format_field(key: &str, value: &Value) -> String {
    let rendered = sanitize_message(&value.to_string());
    let needs_quotes = rendered.is_empty()
        || rendered
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '=');
    if needs_quotes {
        format!("{}={:?}", key, rendered)
    } else {
        format!("{}={}", key, rendered)
    }
}
