//! Planner view - market header, suggestion readout, and PnL chart.

use ratatui::{
    layout::Rect,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::types::{MarketSnapshot, PnlCurve, TradeSuggestion};

/// Render the market snapshot header.
pub fn render_market(frame: &mut Frame, area: Rect, market: &MarketSnapshot, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(market.symbol.clone(), theme.title()),
        Span::raw("  "),
        Span::styled("Entry: ", theme.muted()),
        Span::raw(format!("${:.4}", market.entry_price)),
        Span::raw("  "),
        Span::styled("Size: ", theme.muted()),
        Span::raw(format!("{:.2}", market.order_size)),
        Span::raw("  "),
        Span::styled("Fetched: ", theme.muted()),
        Span::raw(market.fetched_at.format("%H:%M:%S UTC").to_string()),
    ]);

    let block = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("🪙 Market")
            .border_style(theme.border()),
    );

    frame.render_widget(block, area);
}

/// Render the trade suggestion panel.
pub fn render_suggestion(
    frame: &mut Frame,
    area: Rect,
    suggestion: Option<&TradeSuggestion>,
    theme: &Theme,
) {
    let lines = match suggestion {
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Enter a target price and press Enter.",
                theme.muted(),
            )),
        ],
        Some(s) if s.is_viable() => {
            let pnl_style = if s.potential_pnl_pct >= 0.0 {
                theme.success()
            } else {
                theme.error()
            };
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Leverage:    ", theme.muted()),
                    Span::styled(format!("{}x", s.optimal_leverage), theme.title()),
                ]),
                Line::from(vec![
                    Span::styled("PnL:         ", theme.muted()),
                    Span::styled(format!("{:+.2}%", s.potential_pnl_pct), pnl_style),
                ]),
                Line::from(vec![
                    Span::styled("Liquidation: ", theme.muted()),
                    Span::raw(format!("${:.2}", s.liquidation_price)),
                ]),
                Line::from(vec![
                    Span::styled("Breakeven:   ", theme.muted()),
                    Span::raw(format!("${:.2}", s.breakeven_price)),
                ]),
            ];
            if let Some(fees) = s.estimated_borrow_fees {
                lines.push(Line::from(vec![
                    Span::styled("Borrow fees: ", theme.muted()),
                    Span::raw(format!("${:.2}", fees)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(s.message.clone(), theme.muted())));
            lines
        }
        Some(s) => vec![
            Line::from(Span::styled("No viable leverage", theme.warning())),
            Line::from(""),
            Line::from(Span::styled(s.message.clone(), theme.muted())),
        ],
    };

    let block = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("🎯 Suggestion")
            .border_style(theme.border()),
    );

    frame.render_widget(block, area);
}

/// Render the projected PnL chart for the sampled curve.
pub fn render_chart(frame: &mut Frame, area: Rect, curve: Option<&PnlCurve>, theme: &Theme) {
    let curve = match curve {
        Some(c) if !c.points.is_empty() => c,
        _ => {
            let block = Block::default()
                .borders(Borders::ALL)
                .title("📈 Projected PnL")
                .border_style(theme.border());
            frame.render_widget(block, area);
            return;
        }
    };

    let leveraged: Vec<(f64, f64)> = curve
        .points
        .iter()
        .map(|p| (p.price, p.leveraged_pnl_pct))
        .collect();
    let spot: Vec<(f64, f64)> = curve
        .points
        .iter()
        .map(|p| (p.price, p.spot_pnl_pct))
        .collect();

    let (min_price, max_price) = curve.price_bounds();
    let (min_pnl, max_pnl) = curve.pnl_bounds();
    // Keep the zero line inside the plot.
    let y_min = min_pnl.min(0.0);
    let y_max = max_pnl.max(0.0);

    let datasets = vec![
        Dataset::default()
            .name(format!("{}x", curve.leverage))
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.success())
            .data(&leveraged),
        Dataset::default()
            .name("Spot")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.muted())
            .data(&spot),
    ];

    let x_axis = Axis::default()
        .title("Price")
        .style(theme.muted())
        .bounds([min_price, max_price])
        .labels(vec![
            Span::raw(format!("{:.2}", min_price)),
            Span::raw(format!("{:.2}", (min_price + max_price) / 2.0)),
            Span::raw(format!("{:.2}", max_price)),
        ]);

    let y_axis = Axis::default()
        .title("PnL %")
        .style(theme.muted())
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(format!("{:.0}", y_min)),
            Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
            Span::raw(format!("{:.0}", y_max)),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "📈 Projected PnL over {} days",
                    curve.timeframe_days
                ))
                .border_style(theme.border()),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}
