use camino::Utf8Path;
use tracing::warn;

/// Why a directory entry or log file was left out of a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Unreadable(String),
    Malformed(String),
}

/// Receives the per-entry degradations a read absorbs instead of surfacing.
/// Readers take one of these so callers can observe exactly what was skipped.
pub trait DiagnosticSink {
    fn skipped(&mut self, path: &Utf8Path, reason: SkipReason);
}

/// Default sink: reports skips on the operator log and nothing else.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn skipped(&mut self, path: &Utf8Path, reason: SkipReason) {
        warn!("skipping {}: {:?}", path, reason);
    }
}
