pub mod simulated;

pub use simulated::SimulatedFeed;
