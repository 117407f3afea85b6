//! Logging sinks for binder output
//!
//! The binder writes two kinds of lines: informational lines (only when
//! `debug` is on) and warnings. [`TracingSink`] forwards them to `tracing`;
//! [`RecordingSink`] keeps them in memory.

use std::sync::{Mutex, PoisonError};

/// Log target used by [`TracingSink`].
pub const LOG_TARGET: &str = "sdkproxy::proxy";

/// Destination for the binder's human readable output.
pub trait LogSink {
    fn info(&self, line: &str);
    fn warn(&self, line: &str);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn info(&self, line: &str) {
        (**self).info(line);
    }

    fn warn(&self, line: &str) {
        (**self).warn(line);
    }
}

/// Emits lines as `tracing` events under [`LOG_TARGET`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, line: &str) {
        tracing::info!(target: LOG_TARGET, "{line}");
    }

    fn warn(&self, line: &str) {
        tracing::warn!(target: LOG_TARGET, "{line}");
    }
}

/// Severity of a recorded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warn,
}

/// A line captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every line in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<LogLine>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded lines.
    #[must_use]
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages recorded at `level`.
    #[must_use]
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|line| line.level == level)
            .map(|line| line.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn push(&self, level: LogLevel, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogLine {
                level,
                message: line.to_owned(),
            });
    }
}

impl LogSink for RecordingSink {
    fn info(&self, line: &str) {
        self.push(LogLevel::Info, line);
    }

    fn warn(&self, line: &str) {
        self.push(LogLevel::Warn, line);
    }
}
