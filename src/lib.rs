//! Fulcrum - Leveraged-trade planning calculator for cryptocurrency positions

pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod tui;
pub mod types;

// Re-export commonly used types
pub use services::TradePlanner;
pub use types::*;
