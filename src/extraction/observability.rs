use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ExtractionError;

use super::unified::SourceKind;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExtractionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (extraction failed).
    Error,
    /// Critical error (I/O or other infrastructure failures).
    Critical,
}

/// Context about an extraction attempt.
#[derive(Debug, Clone)]
pub struct ExtractionContext {
    /// Which connector ran.
    pub kind: SourceKind,
    /// Rendered origin identifier (path, endpoint, db path + table, ...).
    pub origin: String,
}

/// Minimal stats reported on successful extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Number of extracted rows.
    pub rows: usize,
}

/// Observer capability for extraction outcomes.
///
/// The crate never reaches for a global logger; callers inject an observer
/// through [`super::ExtractionOptions`] once and the connectors report to
/// it read-only. Implementors can record logs, metrics, or trigger alerts.
pub trait ExtractionObserver: Send + Sync {
    /// Called when extraction succeeds.
    fn on_success(&self, _ctx: &ExtractionContext, _stats: ExtractionStats) {}

    /// Called when extraction fails.
    fn on_failure(&self, _ctx: &ExtractionContext, _severity: ExtractionSeverity, _error: &ExtractionError) {}

    /// Called when an extraction failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ExtractionContext, severity: ExtractionSeverity, error: &ExtractionError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ExtractionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ExtractionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ExtractionObserver for CompositeObserver {
    fn on_success(&self, ctx: &ExtractionContext, stats: ExtractionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &ExtractionContext, severity: ExtractionSeverity, error: &ExtractionError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &ExtractionContext, severity: ExtractionSeverity, error: &ExtractionError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs extraction events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ExtractionObserver for StdErrObserver {
    fn on_success(&self, ctx: &ExtractionContext, stats: ExtractionStats) {
        eprintln!(
            "[extract][ok] source={:?} origin={} rows={}",
            ctx.kind, ctx.origin, stats.rows
        );
    }

    fn on_failure(&self, ctx: &ExtractionContext, severity: ExtractionSeverity, error: &ExtractionError) {
        eprintln!(
            "[extract][{:?}] source={:?} origin={} err={}",
            severity, ctx.kind, ctx.origin, error
        );
    }

    fn on_alert(&self, ctx: &ExtractionContext, severity: ExtractionSeverity, error: &ExtractionError) {
        eprintln!(
            "[ALERT][extract][{:?}] source={:?} origin={} err={}",
            severity, ctx.kind, ctx.origin, error
        );
    }
}

/// Appends extraction events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl ExtractionObserver for FileObserver {
    fn on_success(&self, ctx: &ExtractionContext, stats: ExtractionStats) {
        self.append_line(&format!(
            "{} ok source={:?} origin={} rows={}",
            unix_ts(),
            ctx.kind,
            ctx.origin,
            stats.rows
        ));
    }

    fn on_failure(&self, ctx: &ExtractionContext, severity: ExtractionSeverity, error: &ExtractionError) {
        self.append_line(&format!(
            "{} fail severity={:?} source={:?} origin={} err={}",
            unix_ts(),
            severity,
            ctx.kind,
            ctx.origin,
            error
        ));
    }

    fn on_alert(&self, ctx: &ExtractionContext, severity: ExtractionSeverity, error: &ExtractionError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} source={:?} origin={} err={}",
            unix_ts(),
            severity,
            ctx.kind,
            ctx.origin,
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
