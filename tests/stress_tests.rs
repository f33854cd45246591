//! Lifecycle and concurrency tests
//!
//! These tests verify:
//! - Reload stops at the first failing handler without rollback
//! - Close reaches every handler and tolerates repetition
//! - Concurrent callers never interleave partial lines

use rust_handler_logger::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Records lifecycle calls; optionally fails reload
struct ProbeHandler {
    label: &'static str,
    fail_reload: bool,
    reloads: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
}

impl ProbeHandler {
    fn new(label: &'static str, fail_reload: bool) -> Self {
        Self {
            label,
            fail_reload,
            reloads: Arc::new(AtomicUsize::new(0)),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn counters(&self) -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        (Arc::clone(&self.reloads), Arc::clone(&self.closes))
    }
}

impl Handler for ProbeHandler {
    fn handle(&self, _record: &Record) {}

    fn reload(&self) -> Result<()> {
        self.reloads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reload {
            Err(LoggerError::destination(self.label, "cannot reacquire"))
        } else {
            Ok(())
        }
    }

    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_reload {
            // A failing close is reported out of band, never returned
            eprintln!("[LOGGER ERROR] {} failed to close", self.label);
        }
    }

    fn name(&self) -> &str {
        self.label
    }
}

#[test]
fn test_reload_stops_at_first_failure() {
    let h1 = ProbeHandler::new("h1", false);
    let h2 = ProbeHandler::new("h2", true);
    let h3 = ProbeHandler::new("h3", false);
    let (r1, _) = h1.counters();
    let (r2, _) = h2.counters();
    let (r3, _) = h3.counters();

    let mut logger = Logger::null();
    logger.add_handler(Box::new(h1));
    logger.add_handler(Box::new(h2));
    logger.add_handler(Box::new(h3));

    let err = logger.reload().expect_err("h2 should fail");
    assert!(err.to_string().contains("h2"));

    assert_eq!(r1.load(Ordering::SeqCst), 1);
    assert_eq!(r2.load(Ordering::SeqCst), 1);
    assert_eq!(r3.load(Ordering::SeqCst), 0);
}

#[test]
fn test_reload_through_decorators() {
    let h1 = ProbeHandler::new("h1", false);
    let (r1, c1) = h1.counters();

    let logger = Logger::builder()
        .handler(h1)
        .json(true)
        .build()
        .expect("Failed to build logger");
    assert_eq!(logger.handler_names(), vec!["smart(json(h1))"]);

    logger.reload().expect("reload");
    logger.close();

    assert_eq!(r1.load(Ordering::SeqCst), 1);
    assert_eq!(c1.load(Ordering::SeqCst), 1);
}

#[test]
fn test_close_reaches_all_handlers() {
    let probes: Vec<ProbeHandler> = vec![
        ProbeHandler::new("a", false),
        ProbeHandler::new("b", true),
        ProbeHandler::new("c", false),
        ProbeHandler::new("d", true),
    ];
    let closes: Vec<Arc<AtomicUsize>> = probes.iter().map(|p| p.counters().1).collect();

    let mut logger = Logger::null();
    for probe in probes {
        logger.add_handler(Box::new(probe));
    }

    logger.close();
    assert!(closes.iter().all(|c| c.load(Ordering::SeqCst) == 1));

    // Second close must not panic
    logger.close();
    drop(logger);
}

#[test]
fn test_close_twice_on_real_terminals() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("twice.log");

    let logger = Logger::from_options(&LoggerOptions::file(
        log_file.to_str().unwrap(),
        ["info"],
    ))
    .expect("Failed to build logger");

    logger.info(["once"]);
    logger.close();
    logger.close();

    // Records after close are dropped; the call must simply not crash
    logger.info(["after close"]);
    assert!(matches!(
        logger.reload(),
        Err(LoggerError::HandlerClosed { .. })
    ));
}

#[test]
fn test_concurrent_logging_keeps_lines_whole() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let logger = Arc::new(
        Logger::from_options(&LoggerOptions::bare(log_file.to_str().unwrap()).with_json(true))
            .expect("Failed to build logger"),
    );

    let mut handles = vec![];
    for thread_id in 0..8 {
        let logger = Arc::clone(&logger);
        handles.push(std::thread::spawn(move || {
            for i in 0..100 {
                logger.infof("thread {} message {}", [thread_id, i]);
            }
        }));
    }
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }
    logger.close();

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 800);
    for line in lines {
        let payload: serde_json::Value = serde_json::from_str(line).expect("whole JSON line");
        assert_eq!(payload["level"], "INFO");
    }
}
