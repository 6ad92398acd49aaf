//! PnL Curve Sampling
//!
//! Pure glue over the planner's pricing functions: evaluates leveraged and
//! spot PnL percentages at evenly spaced prices so the chart widgets can
//! plot the payoff shape. No logic of its own beyond grid construction.

use crate::services::planner::TradePlanner;
use crate::types::{CurvePoint, PnlCurve};

/// Sample count used when the caller has no preference.
pub const DEFAULT_STEPS: usize = 60;

/// Price window for a chart: from 80% of entry up to 20% past the higher
/// of entry and target, so the flat region below entry and the payoff
/// beyond the target both stay visible.
pub fn default_window(entry_price: f64, target_price: f64) -> (f64, f64) {
    let high = entry_price.max(target_price);
    (entry_price * 0.8, high * 1.2)
}

/// Sample leveraged and spot PnL at `steps` evenly spaced prices across
/// `[start_price, end_price]`, both endpoints included.
///
/// Fewer than two steps would collapse the grid, so the count is raised to
/// two. The final point is pinned to `end_price` exactly rather than
/// accumulated, keeping the chart's right edge stable.
pub fn sample_curve(
    planner: &TradePlanner,
    leverage: u32,
    timeframe_days: u32,
    start_price: f64,
    end_price: f64,
    steps: usize,
) -> PnlCurve {
    let steps = steps.max(2);
    let step_size = (end_price - start_price) / (steps - 1) as f64;

    let mut points = Vec::with_capacity(steps);
    for i in 0..steps {
        let price = if i + 1 == steps {
            end_price
        } else {
            start_price + step_size * i as f64
        };
        points.push(CurvePoint {
            price,
            leveraged_pnl_pct: planner.leverage_pnl_percent(price, leverage, timeframe_days),
            spot_pnl_pct: planner.spot_pnl_percent(price),
        });
    }

    PnlCurve {
        symbol: planner.market().symbol.clone(),
        leverage,
        timeframe_days,
        points,
    }
}
