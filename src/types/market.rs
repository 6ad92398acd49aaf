use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Market context for a single asset, resolved once by the price feed.
///
/// Entry price and order size must be positive; callers that construct a
/// snapshot by hand are responsible for that. The feed never produces a
/// non-positive price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    /// Asset symbol (display only).
    pub symbol: String,
    /// Entry price in USD.
    pub entry_price: f64,
    /// Fixed order size in asset units.
    pub order_size: f64,
    /// When the price was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl MarketSnapshot {
    /// Create a snapshot stamped with the current time.
    pub fn new(symbol: impl Into<String>, entry_price: f64, order_size: f64) -> Self {
        Self {
            symbol: symbol.into(),
            entry_price,
            order_size,
            fetched_at: Utc::now(),
        }
    }

    /// Notional position value at the entry price (order size × entry).
    pub fn notional(&self) -> f64 {
        self.order_size * self.entry_price
    }
}

/// Fee rates used by the pricing functions. All values are decimal
/// fractions (0.001 = 0.1%).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    /// One-way trading fee for leveraged orders.
    pub leverage_fee_one_way: f64,
    /// Roundtrip (open + close) trading fee for leveraged orders.
    pub leverage_fee_roundtrip: f64,
    /// Roundtrip trading fee for unleveraged spot trades.
    pub spot_fee_roundtrip: f64,
    /// Daily borrow rate charged on the borrowed portion of a leveraged
    /// position. Placeholder rate, not exchange-calibrated.
    pub daily_borrow_rate: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            leverage_fee_one_way: 0.0005,   // 0.05%
            leverage_fee_roundtrip: 0.001,  // 0.1%
            spot_fee_roundtrip: 0.004,      // 0.4%
            daily_borrow_rate: 0.0002,      // 0.02% per day
        }
    }
}
