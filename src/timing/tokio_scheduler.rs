use crate::timing::scheduler::{FiredTimer, Scheduler, TimerId, TimerKind};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Scheduler backed by tokio timers.
///
/// Each timer runs as a spawned task that sends a [`FiredTimer`] on the
/// channel returned by [`TokioScheduler::new`]. Must be used from within a
/// tokio runtime.
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<FiredTimer>,
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FiredTimer>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            next_id: 0,
            tasks: HashMap::new(),
        };
        (scheduler, rx)
    }

    fn allocate(&mut self) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn active_timers(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_once(&mut self, delay: Duration, kind: TimerKind) -> TimerId {
        let id = self.allocate();
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(FiredTimer { id, kind });
        });
        self.tasks.insert(id, task);
        id
    }

    fn schedule_repeating(&mut self, period: Duration, kind: TimerKind) -> TimerId {
        let id = self.allocate();
        let tx = self.tx.clone();
        let period = period.max(Duration::from_millis(1));
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            loop {
                interval.tick().await;
                if tx.send(FiredTimer { id, kind }).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_once_timer_is_delivered_on_the_channel() {
        let (mut scheduler, mut rx) = TokioScheduler::new();
        let id = scheduler.schedule_once(Duration::from_secs(1), TimerKind::HideMismatch);

        let fired = rx.recv().await.unwrap();

        assert_eq!(
            fired,
            FiredTimer {
                id,
                kind: TimerKind::HideMismatch
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_is_not_delivered() {
        let (mut scheduler, mut rx) = TokioScheduler::new();
        let cancelled = scheduler.schedule_once(Duration::from_secs(1), TimerKind::HideMismatch);
        let kept = scheduler.schedule_once(Duration::from_secs(2), TimerKind::HideMismatch);
        scheduler.cancel(cancelled);

        let fired = rx.recv().await.unwrap();

        assert_eq!(fired.id, kept);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeating_timer_keeps_ticking_until_cancelled() {
        let (mut scheduler, mut rx) = TokioScheduler::new();
        let id = scheduler.schedule_repeating(Duration::from_secs(1), TimerKind::DisplayTick);

        for _ in 0..3 {
            let fired = rx.recv().await.unwrap();
            assert_eq!(fired.id, id);
            assert_eq!(fired.kind, TimerKind::DisplayTick);
        }

        scheduler.cancel(id);
        tokio::task::yield_now().await;
        assert_eq!(scheduler.active_timers(), 0);
    }
}
