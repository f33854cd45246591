//! Logging macros taking heterogeneous arguments.
//!
//! Every argument goes through [`Value::from`](crate::Value), so strings,
//! integers, floats, booleans and `serde_json::Value`s can be mixed freely.
//! The call site recorded for the smart handler is the macro invocation.
//!
//! # Examples
//!
//! ```
//! use rust_handler_logger::prelude::*;
//! use rust_handler_logger::{info, warningf};
//!
//! let logger = Logger::null();
//!
//! info!(logger, "user", 42, true);
//! warningf!(logger, "disk at {}% on {}", 91, "/var");
//! ```

/// Log the arguments at a level, joined with spaces.
///
/// ```
/// # use rust_handler_logger::prelude::*;
/// # let logger = Logger::null();
/// use rust_handler_logger::log;
/// log!(logger, LogLevel::Notice, "cache warmed in", 12, "ms");
/// log!(logger, LogLevel::All);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($arg)),*];
        $logger.log($level, "", args)
    }};
}

/// Log at a level using a `{}` template.
///
/// ```
/// # use rust_handler_logger::prelude::*;
/// # let logger = Logger::null();
/// use rust_handler_logger::logf;
/// logf!(logger, LogLevel::Error, "request {} failed with {}", "abc", 503);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $format:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($arg)),*];
        $logger.log($level, $format, args)
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $arg)*)
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Debug, $format $(, $arg)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $arg)*)
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Info, $format $(, $arg)*)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Notice $(, $arg)*)
    };
}

#[macro_export]
macro_rules! noticef {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Notice, $format $(, $arg)*)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warning $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warningf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Warning, $format $(, $arg)*)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $arg)*)
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Error, $format $(, $arg)*)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Critical $(, $arg)*)
    };
}

#[macro_export]
macro_rules! criticalf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Critical, $format $(, $arg)*)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Alert $(, $arg)*)
    };
}

#[macro_export]
macro_rules! alertf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Alert, $format $(, $arg)*)
    };
}

/// Log an emergency-level message.
#[macro_export]
macro_rules! emergency {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Emergency $(, $arg)*)
    };
}

#[macro_export]
macro_rules! emergencyf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Emergency, $format $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::handlers::{BareHandler, MemoryDestination};
    use crate::Logger;

    #[test]
    fn test_macros_mix_argument_types() {
        let dest = MemoryDestination::new();
        let buffer = dest.buffer();
        let mut logger = Logger::null();
        logger.add_handler(Box::new(BareHandler::new(Box::new(dest))));

        crate::info!(logger, "user", 42, true, 1.5);
        crate::errorf!(logger, "{} failed: {}", "job", serde_json::json!({"code": 7}));
        crate::log!(logger, crate::LogLevel::All);

        assert_eq!(
            buffer.lines(),
            vec!["[INFO] user 42 true 1.5", r#"[ERROR] job failed: {"code":7}"#, ""]
        );
    }
}
