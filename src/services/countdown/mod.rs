mod calculator;
mod ticker;

pub use calculator::{compute_time_remaining, CountdownCalculator};
pub use ticker::{Clock, CountdownTicker};
