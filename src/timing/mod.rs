pub mod clock;
pub mod scheduler;
pub mod tokio_scheduler;
pub mod virtual_time;

pub use clock::{Clock, SystemClock};
pub use scheduler::{FiredTimer, Scheduler, TimerId, TimerKind};
pub use tokio_scheduler::TokioScheduler;
pub use virtual_time::VirtualTime;
