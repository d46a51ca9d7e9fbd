mod days;
mod engine;
mod timer;

pub use days::{accessible_label, days_remaining, days_remaining_at};
pub use engine::{Clock, CountdownEngine, EngineTick, SystemClock};
pub use timer::{MidnightTimer, TimerPhase};
