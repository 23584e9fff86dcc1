use std::fmt;
use std::time::Duration;

/// Handle to a scheduled timer, unique per scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Turns a mismatched pair face down again.
    HideMismatch,
    /// Once-per-period refresh of the elapsed time display.
    DisplayTick,
}

/// A timer that came due and must be handed back to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub kind: TimerKind,
}

/// Deferred actions the engine can arm and cancel.
///
/// Implementations never call back into the engine; the host delivers each
/// [`FiredTimer`] through `GameEngine::on_timer`.
pub trait Scheduler {
    fn schedule_once(&mut self, delay: Duration, kind: TimerKind) -> TimerId;

    fn schedule_repeating(&mut self, period: Duration, kind: TimerKind) -> TimerId;

    /// Cancelling an unknown or already fired timer is a no-op.
    fn cancel(&mut self, id: TimerId);
}
