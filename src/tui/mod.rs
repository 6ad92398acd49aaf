//! Terminal UI module for planning trades interactively.

mod app;
mod events;
mod planner_view;
mod theme;

pub use app::{run_tui, App};
pub use theme::Theme;

/// Input field focus order for the planner form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Target,
    Timeframe,
    Risk,
}

impl Focus {
    /// Get the field label.
    pub fn label(&self) -> &str {
        match self {
            Self::Target => "Target Price",
            Self::Timeframe => "Timeframe (days)",
            Self::Risk => "Risk Level",
        }
    }

    /// The field after this one, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Self::Target => Self::Timeframe,
            Self::Timeframe => Self::Risk,
            Self::Risk => Self::Target,
        }
    }

    /// The field before this one, wrapping around.
    pub fn previous(&self) -> Self {
        match self {
            Self::Target => Self::Risk,
            Self::Timeframe => Self::Target,
            Self::Risk => Self::Timeframe,
        }
    }
}
