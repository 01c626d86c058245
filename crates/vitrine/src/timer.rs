//! Repeating timers for autoplay
//!
//! A [`Scheduler`] arms and clears repeating intervals and identifies them by
//! [`TimerId`]. The host routes each tick back to the owning widget, which
//! asks its [`AutoplayTimer`] whether the tick is its own.
//!
//! [`ManualScheduler`] is a virtual-time implementation: nothing fires until
//! the host advances the clock, which makes autoplay fully deterministic in
//! tests and scripted demos.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::Preferences;

/// Opaque identifier of an armed interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Wrap a raw backend identifier
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw backend identifier
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Source of repeating intervals
pub trait Scheduler {
    /// Arm an interval that fires every `delay` until cleared
    fn set_interval(&mut self, delay: Duration) -> TimerId;

    /// Clear an interval; unknown or already-cleared ids are ignored
    fn clear_interval(&mut self, id: TimerId);
}

/// Owned autoplay interval with idempotent start/stop
///
/// The timer holds at most one interval. Starting while running replaces the
/// interval, stopping while stopped does nothing. When constructed under the
/// reduced-motion preference, `start` is a permanent no-op.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    delay: Duration,
    handle: Option<TimerId>,
    suppressed: bool,
}

impl AutoplayTimer {
    /// Create a stopped timer
    pub fn new(delay: Duration, preferences: &Preferences) -> Self {
        Self {
            delay,
            handle: None,
            suppressed: preferences.reduced_motion,
        }
    }

    /// Arm the interval, replacing any running one
    ///
    /// # Returns
    /// `false` if reduced motion suppresses autoplay, `true` otherwise
    pub fn start(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        if self.suppressed {
            return false;
        }
        self.stop(scheduler);
        self.handle = Some(scheduler.set_interval(self.delay));
        log::trace!("autoplay armed every {:?}", self.delay);
        true
    }

    /// Clear the interval if one is armed
    pub fn stop(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.handle.take() {
            scheduler.clear_interval(handle);
            log::trace!("autoplay cleared");
        }
    }

    /// Whether an interval is currently armed
    pub fn is_playing(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether `id` is this timer's live interval
    pub fn owns(&self, id: TimerId) -> bool {
        self.handle == Some(id)
    }
}

#[derive(Debug, Clone, Copy)]
struct ManualInterval {
    delay: Duration,
    due: Duration,
}

/// Deterministic virtual-time scheduler
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    intervals: BTreeMap<TimerId, ManualInterval>,
    armed_total: usize,
}

impl ManualScheduler {
    /// Shortest interval accepted; zero delays are raised to this
    pub const MIN_DELAY: Duration = Duration::from_millis(1);

    /// Create a scheduler at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of intervals currently armed
    pub fn active_intervals(&self) -> usize {
        self.intervals.len()
    }

    /// Number of intervals ever armed
    pub fn armed_total(&self) -> usize {
        self.armed_total
    }

    /// Whether `id` is still armed
    pub fn is_active(&self, id: TimerId) -> bool {
        self.intervals.contains_key(&id)
    }

    /// Delay of an armed interval
    pub fn delay_of(&self, id: TimerId) -> Option<Duration> {
        self.intervals.get(&id).map(|i| i.delay)
    }

    /// Pop the earliest firing due at or before `until`
    ///
    /// Moves the clock to the firing time and reschedules the interval one
    /// period later. Ties fire in arming order.
    pub fn next_due(&mut self, until: Duration) -> Option<TimerId> {
        let (id, interval) = self
            .intervals
            .iter_mut()
            .filter(|(_, interval)| interval.due <= until)
            .min_by_key(|(id, interval)| (interval.due, **id))?;
        let id = *id;
        self.now = self.now.max(interval.due);
        interval.due += interval.delay;
        Some(id)
    }

    /// Move the clock forward to `until` (never backwards)
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for ManualScheduler {
    fn set_interval(&mut self, delay: Duration) -> TimerId {
        let delay = delay.max(Self::MIN_DELAY);
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.armed_total += 1;
        self.intervals.insert(
            id,
            ManualInterval {
                delay,
                due: self.now + delay,
            },
        );
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.intervals.remove(&id);
    }
}
