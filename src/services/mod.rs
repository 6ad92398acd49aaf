pub mod curve;
pub mod planner;

pub use curve::{default_window, sample_curve, DEFAULT_STEPS};
pub use planner::{round2, TradePlanner};
