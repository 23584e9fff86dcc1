use crate::timing::clock::Clock;
use crate::timing::scheduler::{FiredTimer, Scheduler, TimerId, TimerKind};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug)]
struct PendingTimer {
    due: Duration,
    period: Option<Duration>,
    kind: TimerKind,
}

#[derive(Debug, Default)]
struct VirtualTimeState {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, PendingTimer>,
}

/// Manually driven clock and scheduler.
///
/// Clones share the same timeline, so a test can keep one handle while the
/// engine owns others.
#[derive(Debug, Clone, Default)]
pub struct VirtualTime {
    state: Rc<RefCell<VirtualTimeState>>,
}

impl VirtualTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward by `by` and returns every timer that came due,
    /// earliest first. Repeating timers fire once per elapsed period.
    pub fn advance(&self, by: Duration) -> Vec<FiredTimer> {
        let mut state = self.state.borrow_mut();
        let target = state.now + by;
        let mut fired = Vec::new();

        loop {
            let next = state
                .timers
                .iter()
                .filter(|(_, timer)| timer.due <= target)
                .min_by_key(|(id, timer)| (timer.due, **id))
                .map(|(id, _)| *id);
            let Some(id) = next else { break };

            let Some(timer) = state.timers.remove(&id) else { break };
            state.now = timer.due;
            fired.push(FiredTimer {
                id,
                kind: timer.kind,
            });
            if let Some(period) = timer.period {
                state.timers.insert(
                    id,
                    PendingTimer {
                        due: timer.due + period,
                        ..timer
                    },
                );
            }
        }

        state.now = target;
        fired
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.state.borrow().timers.contains_key(&id)
    }

    fn insert(&self, delay: Duration, period: Option<Duration>, kind: TimerKind) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = TimerId(state.next_id);
        state.next_id += 1;
        let due = state.now + delay;
        state.timers.insert(id, PendingTimer { due, period, kind });
        id
    }
}

impl Clock for VirtualTime {
    fn now(&self) -> Duration {
        self.state.borrow().now
    }
}

impl Scheduler for VirtualTime {
    fn schedule_once(&mut self, delay: Duration, kind: TimerKind) -> TimerId {
        self.insert(delay, None, kind)
    }

    fn schedule_repeating(&mut self, period: Duration, kind: TimerKind) -> TimerId {
        // A zero period would fire forever within a single advance.
        let period = period.max(Duration::from_millis(1));
        self.insert(period, Some(period), kind)
    }

    fn cancel(&mut self, id: TimerId) {
        self.state.borrow_mut().timers.remove(&id);
    }
}
