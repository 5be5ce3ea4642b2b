//! Report sinks and the batched error reporter shared by all checks

use std::fmt::Write as _;
use tracing::Level;

/// Maximum number of bullets logged per batch before the rest are summarized.
pub const DEFAULT_ERROR_LIMIT: usize = 100;

/// Destination for the human-readable messages produced by the checks.
pub trait ReportSink {
    fn log(&mut self, level: Level, message: &str);
}

/// Forwards every message to the process-wide `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn log(&mut self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!("{message}"),
            Level::WARN => tracing::warn!("{message}"),
            Level::INFO => tracing::info!("{message}"),
            Level::DEBUG => tracing::debug!("{message}"),
            _ => tracing::trace!("{message}"),
        }
    }
}

/// Keeps messages in memory so they can be inspected after a run.
#[derive(Debug, Default, Clone)]
pub struct CapturedLog {
    entries: Vec<(Level, String)>,
}

impl CapturedLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Messages logged at `level` or more severe.
    pub fn messages_at(&self, level: Level) -> impl Iterator<Item = &str> {
        // tracing orders levels by verbosity: ERROR < WARN < ... < TRACE
        self.entries
            .iter()
            .filter(move |(l, _)| *l <= level)
            .map(|(_, m)| m.as_str())
    }

    /// All entries rendered one per line as `LEVEL message`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (level, message) in &self.entries {
            let _ = writeln!(out, "{:<5} {message}", level.as_str());
        }
        out
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|(_, m)| m.contains(needle))
    }
}

impl ReportSink for CapturedLog {
    fn log(&mut self, level: Level, message: &str) {
        self.entries.push((level, message.to_string()));
    }
}

/// Log `heading`, then up to `limit` errors as bullets, then a count of the
/// ones left out.
pub fn log_validation_errors<S: AsRef<str>>(
    sink: &mut dyn ReportSink,
    heading: &str,
    errors: &[S],
    level: Level,
    limit: usize,
) {
    sink.log(level, &format!("{heading}:"));
    for error in errors.iter().take(limit) {
        sink.log(level, &format!("- {}", error.as_ref()));
    }
    if errors.len() > limit {
        sink.log(level, &format!("and {} more...", errors.len() - limit));
    }
}

/// A sink paired with the batch limit of a run.
pub struct Reporter<'a> {
    sink: &'a mut dyn ReportSink,
    limit: usize,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: &'a mut dyn ReportSink) -> Self {
        Self {
            sink,
            limit: DEFAULT_ERROR_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn error(&mut self, message: &str) {
        self.sink.log(Level::ERROR, message);
    }

    pub fn warn(&mut self, message: &str) {
        self.sink.log(Level::WARN, message);
    }

    pub fn debug(&mut self, message: &str) {
        self.sink.log(Level::DEBUG, message);
    }

    /// Batch of warnings under one heading.
    pub fn warn_batch<S: AsRef<str>>(&mut self, heading: &str, errors: &[S]) {
        log_validation_errors(&mut *self.sink, heading, errors, Level::WARN, self.limit);
    }
}
