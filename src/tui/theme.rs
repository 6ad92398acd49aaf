//! Theme and color definitions for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Theme for the TUI with consistent color scheme.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Get style for titles.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for gains and confirmations.
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get style for warnings.
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Get style for losses and errors.
    pub fn error(&self) -> Style {
        Style::default().fg(self.danger)
    }

    /// Get style for muted text.
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get style for borders.
    pub fn border(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Get style for the focused input field.
    pub fn input_active(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for unfocused input fields.
    pub fn input_inactive(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
