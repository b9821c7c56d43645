//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a fixed-size
//! circular buffer and forwards every record to an output sink.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Output callback invoked for every accepted record
pub type Sink = Box<dyn Fn(&LogLine) + Send + Sync>;

/// A single formatted log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
    sink: Option<Sink>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            sink: None,
        }
    }

    /// Forward every accepted record to `sink` in addition to buffering it
    pub fn with_sink(mut self, sink: impl Fn(&LogLine) + Send + Sync + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// Install as the global `log` backend.
    ///
    /// The logger is leaked so the returned handle can be used for the rest
    /// of the program to read back `recent()` lines.
    pub fn install(self) -> Result<&'static RollingLogger, SetLoggerError> {
        let level = self.level;
        let logger: &'static RollingLogger = Box::leak(Box::new(self));
        log::set_logger(logger)?;
        log::set_max_level(level);
        Ok(logger)
    }

    fn push(&self, line: LogLine) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
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

        let line = LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };

        if let Some(sink) = &self.sink {
            sink(&line);
        }
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn emit(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("dashboard")
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_most_recent_lines() {
        let logger = RollingLogger::new(3, LevelFilter::Trace);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }

        let messages: Vec<String> = logger.recent().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new(10, LevelFilter::Warn);
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Info, "still noise");
        emit(&logger, Level::Error, "boom");

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].level, Level::Error);
        assert_eq!(recent[0].target, "dashboard");
    }

    #[test]
    fn test_sink_sees_every_accepted_record() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let logger = RollingLogger::new(1, LevelFilter::Info)
            .with_sink(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Warn, "b");
        emit(&logger, Level::Trace, "dropped");

        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(logger.recent().len(), 1);
    }

    #[test]
    fn test_zero_capacity_still_keeps_last_line() {
        let logger = RollingLogger::new(0, LevelFilter::Info);
        emit(&logger, Level::Info, "only");
        assert_eq!(logger.capacity(), 1);
        assert_eq!(logger.recent()[0].message, "only");
    }

    #[test]
    fn test_display_format() {
        let line = LogLine {
            timestamp: DateTime::parse_from_rfc3339("2024-03-01T12:34:56.789Z")
                .map(|t| t.with_timezone(&Utc))
                .unwrap(),
            level: Level::Warn,
            target: "api".to_string(),
            message: "slow".to_string(),
        };
        assert_eq!(line.to_string(), "12:34:56.789 WARN  [api] slow");
    }
}
