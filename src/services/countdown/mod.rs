mod calculator;
mod ticker;

pub use calculator::compute_countdown;
pub use ticker::{Clock, CountdownTicker, SystemClock, DEFAULT_REFRESH_INTERVAL};
