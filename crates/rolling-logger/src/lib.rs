//! Rolling Logger
//!
//! A `log` backend for browser frontends. Every record is mirrored to the
//! developer console and the most recent ones are kept in a fixed-size ring,
//! so a diagnostics panel can show them without any storage.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// A single captured log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Render as `HH:MM:SS.mmm LEVEL [app] target: message`
    pub fn format_line(&self, app_name: &str) -> String {
        format!(
            "{} {:<5} [{}] {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            app_name,
            self.target,
            self.message
        )
    }
}

/// Fixed-capacity FIFO that evicts the oldest entry when full
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Capacity is at least one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append, returning the evicted entry if the buffer was full
    pub fn push(&mut self, entry: T) -> Option<T> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

impl<T: Clone> RingBuffer<T> {
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<RingBuffer<LogEntry>>,
}

impl RollingLogger {
    fn new(app_name: &str, capacity: usize, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(entry.level, &entry.format_line(&self.app_name));
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(entry);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;
    let value = line.into();
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the rolling logger as the global `log` backend.
///
/// Only the first call installs; later calls return `SetLoggerError`.
pub fn init_logger(app_name: &str, capacity: usize, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// Snapshot of retained entries, oldest first. Empty before `init_logger`.
pub fn recent() -> Vec<LogEntry> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|buffer| buffer.snapshot()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut ring = RingBuffer::new(3);
        assert_eq!(ring.push(1), None);
        assert_eq!(ring.push(2), None);
        assert_eq!(ring.push(3), None);
        assert_eq!(ring.push(4), Some(1));
        assert_eq!(ring.snapshot(), vec![2, 3, 4]);
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn test_ring_buffer_zero_capacity_keeps_one() {
        let mut ring = RingBuffer::new(0);
        assert_eq!(ring.capacity(), 1);
        ring.push("a");
        assert_eq!(ring.push("b"), Some("a"));
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_format_line() {
        let entry = LogEntry {
            timestamp: Local::now(),
            level: Level::Warn,
            target: "dark_whale_ui::finance".to_string(),
            message: "bad amount".to_string(),
        };
        let line = entry.format_line("DarkWhale");
        assert!(line.contains("WARN  [DarkWhale] dark_whale_ui::finance: bad amount"));
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = RollingLogger::new("Test", 10, LevelFilter::Info);
        logger.log(&Record::builder().level(Level::Debug).target("t").args(format_args!("hidden")).build());
        logger.log(&Record::builder().level(Level::Error).target("t").args(format_args!("shown")).build());

        let entries = logger.buffer.lock().unwrap().snapshot();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "shown");
    }

    #[test]
    fn test_global_logger_retains_recent() {
        init_logger("Global", 2, LevelFilter::Debug).unwrap();
        assert!(init_logger("Again", 5, LevelFilter::Trace).is_err());

        log::info!("one");
        log::warn!("two");
        log::debug!("three");

        let messages: Vec<String> = recent().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two".to_string(), "three".to_string()]);
    }
}
