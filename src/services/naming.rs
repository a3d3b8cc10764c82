//! Filename derivation for uploaded photos.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Strategy for deriving the storage filename of an uploaded photo.
///
/// Injected into the upload service so tests can substitute a deterministic
/// implementation.
pub trait FileNamer: Send + Sync {
    /// Derive the storage filename for a file originally named `original`.
    fn name_for(&self, original: &str) -> String;
}

/// Production namer: `<unix-millis>-<original-name>`.
///
/// The tick is recomputed per call. When two calls land on the same
/// millisecond the later one bumps past the previous tick, so files sharing
/// a name within one batch still receive distinct storage filenames.
#[derive(Debug, Default)]
pub struct TimestampNamer {
    last_tick: AtomicI64,
}

impl TimestampNamer {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_tick(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last_tick
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        now.max(prev + 1)
    }
}

impl FileNamer for TimestampNamer {
    fn name_for(&self, original: &str) -> String {
        format!("{}-{}", self.next_tick(), original)
    }
}
