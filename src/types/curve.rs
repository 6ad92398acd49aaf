use serde::{Deserialize, Serialize};

/// Projected PnL at a single sampled price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    /// Sampled asset price.
    pub price: f64,
    /// Signed leveraged PnL percentage at this price.
    pub leveraged_pnl_pct: f64,
    /// Spot PnL percentage at this price (clamped at 0).
    pub spot_pnl_pct: f64,
}

/// A PnL curve sampled across a price range at fixed leverage and timeframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlCurve {
    /// Asset symbol the curve was sampled for.
    pub symbol: String,
    /// Leverage the curve was sampled at.
    pub leverage: u32,
    /// Timeframe in days used for borrow fees.
    pub timeframe_days: u32,
    /// Sampled points, in ascending price order.
    pub points: Vec<CurvePoint>,
}

impl PnlCurve {
    /// Lowest and highest leveraged PnL values in the curve, for chart
    /// axis bounds. Returns (0.0, 0.0) for an empty curve.
    pub fn pnl_bounds(&self) -> (f64, f64) {
        if self.points.is_empty() {
            return (0.0, 0.0);
        }
        let mut lo = f64::MAX;
        let mut hi = f64::MIN;
        for p in &self.points {
            lo = lo.min(p.leveraged_pnl_pct);
            hi = hi.max(p.leveraged_pnl_pct);
        }
        (lo, hi)
    }

    /// Price range covered by the curve. Returns (0.0, 0.0) for an empty
    /// curve.
    pub fn price_bounds(&self) -> (f64, f64) {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first.price, last.price),
            _ => (0.0, 0.0),
        }
    }
}
