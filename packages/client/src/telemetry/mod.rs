//! Logging output of the binder

pub mod log_sink;

pub use log_sink::{LOG_TARGET, LogLevel, LogLine, LogSink, RecordingSink, TracingSink};
