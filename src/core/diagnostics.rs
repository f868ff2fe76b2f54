//! core/diagnostics.rs
//! Quiet the decoders' warnings for the length of one analysis.
//!
//! `id3` and `symphonia` report through the `log` facade (e.g. symphonia's
//! Xing/stream-size warnings on slightly off MP3s). When not verbose we drop
//! the global `log` max level to `Error` and put the old level back on drop.
//!
//! The `log` max level is process-wide. Two non-verbose analyses running on
//! different threads at the same time can restore each other's level out of
//! order; callers that need concurrent extraction must serialize non-verbose
//! calls or accept stray decoder warnings.

use log::LevelFilter;

/// RAII guard. Restores the previous `log` level when dropped, including on
/// early returns.
#[must_use = "suppression ends as soon as the gate is dropped"]
#[derive(Debug)]
pub struct DiagnosticGate {
    previous: Option<LevelFilter>,
}

impl DiagnosticGate {
    /// Suppress decoder warnings unless `verbose`.
    pub fn engage(verbose: bool) -> Self {
        if verbose {
            return Self { previous: None };
        }

        let previous = log::max_level();
        log::set_max_level(previous.min(LevelFilter::Error));
        Self {
            previous: Some(previous),
        }
    }

    pub fn is_suppressing(&self) -> bool {
        self.previous.is_some()
    }
}

impl Drop for DiagnosticGate {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            log::set_max_level(previous);
        }
    }
}
