//! Per-phase wall-clock accounting for a comparison session
//!
//! The phase set is closed: navigation, screenshot capture, and diff
//! computation. Totals are additive across the whole session and reported
//! once when the session ends.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::debug;

/// The profiled phases of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Host navigation, including interaction callbacks and their settles
    Goto,
    /// Pre-screenshot settle plus the screenshot itself
    Capture,
    /// Pixel comparison and diff artifact write
    Diff,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goto => "goto",
            Self::Capture => "capture",
            Self::Diff => "diff",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Goto => 0,
            Self::Capture => 1,
            Self::Diff => 2,
        }
    }
}

/// One phase's accumulator. `started_at_ms` holds the start offset from the
/// profiler epoch plus one, with zero meaning "no start pending".
#[derive(Default)]
struct PhaseSlot {
    started_at_ms: AtomicU64,
    total_ms: AtomicU64,
}

/// Cumulative per-phase timings for one session
pub struct Profiler {
    epoch: Instant,
    slots: [PhaseSlot; 3],
}

impl Profiler {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            slots: Default::default(),
        }
    }

    /// Mark a start for `phase`, overwriting any prior unmatched start
    pub fn start(&self, phase: Phase) {
        let now_ms = self.epoch.elapsed().as_millis() as u64;
        self.slots[phase.index()]
            .started_at_ms
            .store(now_ms + 1, Ordering::Release);
    }

    /// Add the elapsed time since the matching start to the phase total.
    ///
    /// A stop with no pending start is a no-op, which tolerates skipped or
    /// error-aborted phases without corrupting other totals.
    pub fn stop(&self, phase: Phase) {
        let slot = &self.slots[phase.index()];
        let started = slot.started_at_ms.swap(0, Ordering::AcqRel);
        if started == 0 {
            return;
        }
        let now_ms = self.epoch.elapsed().as_millis() as u64;
        let elapsed = now_ms.saturating_sub(started - 1);
        slot.total_ms.fetch_add(elapsed, Ordering::Relaxed);
    }

    /// Cumulative milliseconds recorded for `phase`
    pub fn total_ms(&self, phase: Phase) -> u64 {
        self.slots[phase.index()].total_ms.load(Ordering::Relaxed)
    }

    /// Emit the accumulated totals as diagnostic log lines
    pub fn report(&self) {
        for phase in [Phase::Goto, Phase::Capture, Phase::Diff] {
            debug!("profile: {} {}ms", phase.as_str(), self.total_ms(phase));
        }
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_two_cycles_accumulate() {
        let profiler = Profiler::new();

        profiler.start(Phase::Goto);
        sleep(Duration::from_millis(15));
        profiler.stop(Phase::Goto);
        let after_first = profiler.total_ms(Phase::Goto);
        assert!(after_first >= 10);

        profiler.start(Phase::Goto);
        sleep(Duration::from_millis(15));
        profiler.stop(Phase::Goto);
        assert!(profiler.total_ms(Phase::Goto) >= after_first + 10);
    }

    #[test]
    fn test_stop_without_start_is_a_no_op() {
        let profiler = Profiler::new();

        profiler.start(Phase::Capture);
        sleep(Duration::from_millis(5));
        profiler.stop(Phase::Capture);
        let capture_total = profiler.total_ms(Phase::Capture);

        profiler.stop(Phase::Diff);
        profiler.stop(Phase::Diff);

        assert_eq!(profiler.total_ms(Phase::Diff), 0);
        assert_eq!(profiler.total_ms(Phase::Capture), capture_total);
    }

    #[test]
    fn test_restart_overwrites_pending_start() {
        let profiler = Profiler::new();

        profiler.start(Phase::Diff);
        sleep(Duration::from_millis(20));
        // A second start supersedes the first; only time after it counts.
        profiler.start(Phase::Diff);
        profiler.stop(Phase::Diff);

        assert!(profiler.total_ms(Phase::Diff) < 20);
    }

    #[test]
    fn test_phases_are_independent() {
        let profiler = Profiler::new();
        profiler.start(Phase::Goto);
        profiler.start(Phase::Diff);
        sleep(Duration::from_millis(5));
        profiler.stop(Phase::Goto);

        assert_eq!(profiler.total_ms(Phase::Capture), 0);
        assert!(profiler.total_ms(Phase::Goto) > 0);
        assert_eq!(profiler.total_ms(Phase::Diff), 0);
    }
}
