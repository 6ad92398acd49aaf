//! Main TUI application logic.

use super::{events, planner_view, Focus, Theme};
use crate::error::Result;
use crate::services::{curve, TradePlanner};
use crate::types::{PnlCurve, RiskLevel, TradeSuggestion};
use crossterm::{
    event::KeyCode,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::{io, time::Duration};

/// Main TUI application.
pub struct App {
    /// Planner over the fetched market snapshot.
    planner: TradePlanner,
    /// Input field currently receiving keystrokes.
    focus: Focus,
    /// Target price input buffer.
    target_input: String,
    /// Timeframe input buffer (days).
    timeframe_input: String,
    /// Selected risk tier.
    risk: RiskLevel,
    /// Last computed suggestion.
    suggestion: Option<TradeSuggestion>,
    /// Last sampled PnL curve.
    curve: Option<PnlCurve>,
    /// Validation feedback for the status bar.
    status: Option<String>,
    /// Theme.
    theme: Theme,
    /// Should quit.
    should_quit: bool,
}

impl App {
    /// Create a new TUI application over a fetched market snapshot.
    pub fn new(planner: TradePlanner) -> Self {
        Self {
            planner,
            focus: Focus::Target,
            target_input: String::new(),
            timeframe_input: "7".to_string(),
            risk: RiskLevel::default(),
            suggestion: None,
            curve: None,
            status: None,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    /// Handle an event.
    pub fn handle_event(&mut self, event: events::Event) {
        match event {
            events::Event::Key(key) => {
                if events::is_quit(&key) {
                    self.should_quit = true;
                    return;
                }

                match key.code {
                    KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
                    KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
                    KeyCode::Left => self.cycle_risk(false),
                    KeyCode::Right => self.cycle_risk(true),
                    KeyCode::Backspace => self.pop_char(),
                    KeyCode::Enter => self.recompute(),
                    KeyCode::Char(c) => self.push_char(c),
                    _ => {}
                }
            }
            events::Event::Tick => {
                // Periodic update handled by render
            }
            events::Event::Resize(_, _) => {
                // Terminal will handle resize automatically
            }
        }
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Step the risk tier when its selector is focused.
    fn cycle_risk(&mut self, forward: bool) {
        if self.focus != Focus::Risk {
            return;
        }
        let tiers = RiskLevel::all();
        let idx = tiers.iter().position(|r| *r == self.risk).unwrap_or(0);
        let idx = if forward {
            (idx + 1) % tiers.len()
        } else {
            (idx + tiers.len() - 1) % tiers.len()
        };
        self.risk = tiers[idx];
    }

    /// Append a character to the focused input buffer.
    fn push_char(&mut self, c: char) {
        match self.focus {
            Focus::Target => {
                if c.is_ascii_digit() || (c == '.' && !self.target_input.contains('.')) {
                    self.target_input.push(c);
                }
            }
            Focus::Timeframe => {
                if c.is_ascii_digit() {
                    self.timeframe_input.push(c);
                }
            }
            Focus::Risk => {}
        }
    }

    /// Delete the last character of the focused input buffer.
    fn pop_char(&mut self) {
        match self.focus {
            Focus::Target => {
                self.target_input.pop();
            }
            Focus::Timeframe => {
                self.timeframe_input.pop();
            }
            Focus::Risk => {}
        }
    }

    /// Validate the form and recompute the suggestion and curve.
    fn recompute(&mut self) {
        let target: f64 = match self.target_input.parse() {
            Ok(v) if v > 0.0 => v,
            _ => {
                self.status = Some("Target price must be a positive number".to_string());
                return;
            }
        };
        let timeframe_days: u32 = match self.timeframe_input.parse() {
            Ok(v) if v >= 1 => v,
            _ => {
                self.status = Some("Timeframe must be at least 1 day".to_string());
                return;
            }
        };
        self.status = None;

        let suggestion = self.planner.suggest_trade(target, timeframe_days, self.risk);
        // Chart at the suggested leverage, or the tier cap when nothing is
        // viable so the shape of the rejected trade is still visible.
        let leverage = if suggestion.is_viable() {
            suggestion.optimal_leverage
        } else {
            self.risk.profile().max_leverage
        };
        let entry = self.planner.market().entry_price;
        let (start, end) = curve::default_window(entry, target);
        self.curve = Some(curve::sample_curve(
            &self.planner,
            leverage,
            timeframe_days,
            start,
            end,
            curve::DEFAULT_STEPS,
        ));
        self.suggestion = Some(suggestion);
    }

    /// Render the TUI.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.size();

        // Main layout: market header, input form, results, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Market header
                Constraint::Length(3), // Input form
                Constraint::Min(0),    // Suggestion & chart
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        planner_view::render_market(frame, chunks[0], self.planner.market(), &self.theme);
        self.render_form(frame, chunks[1]);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(chunks[2]);

        planner_view::render_suggestion(
            frame,
            content_chunks[0],
            self.suggestion.as_ref(),
            &self.theme,
        );
        planner_view::render_chart(frame, content_chunks[1], self.curve.as_ref(), &self.theme);

        self.render_status_bar(frame, chunks[3]);
    }

    /// Render the three input fields.
    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        self.render_field(frame, chunks[0], Focus::Target, self.target_input.clone());
        self.render_field(
            frame,
            chunks[1],
            Focus::Timeframe,
            self.timeframe_input.clone(),
        );
        self.render_field(
            frame,
            chunks[2],
            Focus::Risk,
            format!("< {} >", self.risk),
        );
    }

    /// Render a single input field.
    fn render_field(&self, frame: &mut Frame, area: Rect, field: Focus, value: String) {
        let focused = self.focus == field;
        let cursor = if focused && field != Focus::Risk { "_" } else { "" };
        let style = if focused {
            self.theme.input_active()
        } else {
            self.theme.input_inactive()
        };

        let text = Line::from(Span::styled(format!("{}{}", value, cursor), style));
        let block = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.label())
                .border_style(if focused {
                    self.theme.border()
                } else {
                    self.theme.muted()
                }),
        );

        frame.render_widget(block, area);
    }

    /// Render status bar.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.status {
            Some(error) => Line::from(Span::styled(error.clone(), self.theme.warning())),
            None => Line::from(vec![
                Span::styled("Tab", self.theme.muted()),
                Span::raw(" next field | "),
                Span::styled("Enter", self.theme.muted()),
                Span::raw(" compute | "),
                Span::styled("←/→", self.theme.muted()),
                Span::raw(" risk tier | "),
                Span::styled("q", self.theme.muted()),
                Span::raw(" quit"),
            ]),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border());

        frame.render_widget(block, area);

        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: 1,
        };

        frame.render_widget(text, inner);
    }
}

/// Run the TUI application.
pub async fn run_tui(planner: TradePlanner) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and event handler
    let mut app = App::new(planner);
    let mut event_handler = events::EventHandler::new(Duration::from_millis(250));

    // Main loop
    loop {
        // Render
        terminal.draw(|f| app.render(f))?;

        // Handle events
        if let Some(event) = event_handler.next().await {
            app.handle_event(event);
        }

        // Check if should quit
        if app.should_quit() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
