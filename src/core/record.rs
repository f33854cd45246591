//! Log record structure

use super::log_level::LogLevel;
use super::value::Value;
use std::cell::RefCell;
use std::panic::Location;

// Thread-local cache for the thread label to avoid repeated allocations
thread_local! {
    static THREAD_LABEL_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Name of the current thread, or its id when unnamed. Cached per thread.
pub(crate) fn current_thread_label() -> String {
    THREAD_LABEL_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| {
                let thread = std::thread::current();
                thread
                    .name()
                    .map(String::from)
                    .unwrap_or_else(|| format!("{:?}", thread.id()))
            })
            .clone()
    })
}

/// How the record's content should reach a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordKind {
    /// Template and arguments, rendered to a text line
    #[default]
    Text,
    /// Already encoded; the single argument is the payload
    Structured,
}

/// One log call.
///
/// Records are never mutated once they enter the handler chain. A decorator
/// that needs to add something builds a new record from the one it was
/// given (see [`Record::with_field`] and [`Record::structured`]).
#[derive(Debug, Clone)]
pub struct Record {
    level: LogLevel,
    format: String,
    args: Vec<Value>,
    fields: Vec<(String, Value)>,
    caller: Option<&'static Location<'static>>,
    kind: RecordKind,
}

impl Record {
    pub fn new(level: LogLevel, format: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            level,
            format: format.into(),
            args,
            fields: Vec::new(),
            caller: None,
            kind: RecordKind::Text,
        }
    }

    /// A record carrying an encoded payload in place of template and arguments.
    pub fn structured(level: LogLevel, payload: serde_json::Value) -> Self {
        Self {
            level,
            format: String::new(),
            args: vec![Value::Json(payload)],
            fields: Vec::new(),
            caller: None,
            kind: RecordKind::Structured,
        }
    }

    #[must_use]
    pub fn with_caller(mut self, caller: &'static Location<'static>) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Append a context field. An existing field with the same key wins.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if self.field(&key).is_none() {
            self.fields.push((key, value.into()));
        }
        self
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn caller(&self) -> Option<&'static Location<'static>> {
        self.caller
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The message text: template substitution or space-joined arguments,
    /// with line breaks and tabs escaped so a record stays on one line.
    pub fn message(&self) -> String {
        sanitize_message(&render_template(&self.format, &self.args))
    }
}

/// Replaces newlines, carriage returns, and tabs with escape sequences
/// to prevent injected fake log entries.
pub(crate) fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Substitute `{}` placeholders with `args` in order.
///
/// An empty template joins the arguments with single spaces. `{{` and `}}`
/// are literal braces, placeholders without an argument stay literal, and
/// surplus arguments are appended after a space.
pub fn render_template(format: &str, args: &[Value]) -> String {
    if format.is_empty() {
        return args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
    }

    let mut out = String::with_capacity(format.len() + args.len() * 8);
    let mut remaining = args.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        match (c, next) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                out.push(c);
            }
            ('{', Some('}')) => {
                chars.next();
                match remaining.next() {
                    Some(arg) => out.push_str(&arg.to_string()),
                    None => out.push_str("{}"),
                }
            }
            _ => out.push(c),
        }
    }

    for arg in remaining {
        out.push(' ');
        out.push_str(&arg.to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separators() {
        let record = Record::new(LogLevel::Info, "", vec![Value::from("user"), Value::from(42)]);
        assert_eq!(record.message(), "user 42");
    }

    #[test]
    fn test_empty_record_is_legal() {
        let record = Record::new(LogLevel::All, "", Vec::new());
        assert_eq!(record.message(), "");
        assert!(record.fields().is_empty());
        assert!(record.caller().is_none());
    }

    #[test]
    fn test_template_substitution() {
        let out = render_template("user {} logged in after {}ms", &[Value::from("bob"), Value::from(12)]);
        assert_eq!(out, "user bob logged in after 12ms");
    }

    #[test]
    fn test_template_escapes_and_mismatch() {
        assert_eq!(render_template("{{}} {}", &[Value::from(1)]), "{} 1");
        assert_eq!(render_template("{} and {}", &[Value::from("a")]), "a and {}");
        assert_eq!(
            render_template("value {}", &[Value::from(1), Value::from(2), Value::from(3)]),
            "value 1 2 3"
        );
    }

    #[test]
    fn test_message_is_sanitized() {
        let record = Record::new(LogLevel::Error, "", vec![Value::from("a\nFAKE\tb")]);
        assert_eq!(record.message(), "a\\nFAKE\\tb");
    }

    #[test]
    fn test_with_field_keeps_existing() {
        let record = Record::new(LogLevel::Info, "", Vec::new())
            .with_field("time", "first")
            .with_field("time", "second");
        assert_eq!(record.fields().len(), 1);
        assert_eq!(record.field("time"), Some(&Value::from("first")));
    }

    #[test]
    fn test_structured_record() {
        let record = Record::structured(LogLevel::Notice, serde_json::json!({"k": 1}));
        assert_eq!(record.kind(), RecordKind::Structured);
        assert_eq!(record.level(), LogLevel::Notice);
        assert_eq!(record.message(), r#"{"k":1}"#);
    }

    #[test]
    fn test_thread_label_is_stable() {
        assert_eq!(current_thread_label(), current_thread_label());
    }
}
