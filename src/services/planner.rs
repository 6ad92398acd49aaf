//! Trade Planner
//!
//! The financial core of fulcrum: fee-aware pricing functions and the
//! bounded search over integer leverage multipliers. Everything here is a
//! pure function of the market snapshot, the fee schedule, and the call
//! arguments; unsuitable inputs are reported inside the suggestion record,
//! never as errors.
//!
//! PnL policy: `leverage_pnl_percent` returns the raw signed percentage
//! (trading and borrow fees deducted, no clamping). Viability filtering
//! against liquidation distance and breakeven happens in `suggest_trade`
//! alone. Spot PnL is the exception and clamps at zero.

use crate::types::{FeeSchedule, MarketSnapshot, RiskLevel, TradeSuggestion};
use tracing::debug;

/// Round a value to two decimals for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fee-aware planner for a single market snapshot.
///
/// The snapshot and fee schedule are owned by value and never mutated, so
/// identical calls always produce identical results. Pricing methods
/// require leverage >= 1; the search range enforces that, and callers using
/// the helpers directly are expected to do the same.
#[derive(Debug, Clone)]
pub struct TradePlanner {
    market: MarketSnapshot,
    fees: FeeSchedule,
}

impl TradePlanner {
    /// Create a planner for the given market and fee schedule.
    pub fn new(market: MarketSnapshot, fees: FeeSchedule) -> Self {
        Self { market, fees }
    }

    /// The market snapshot this planner prices against.
    pub fn market(&self) -> &MarketSnapshot {
        &self.market
    }

    /// The fee schedule in effect.
    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    // ========== Pricing ==========

    /// Price at which a leveraged position covers its roundtrip trading
    /// fee: `entry * (1 + roundtrip_rate / leverage)`.
    ///
    /// Always above entry while the roundtrip rate is positive, approaching
    /// entry as leverage grows.
    pub fn breakeven_price(&self, leverage: u32) -> f64 {
        let leverage = f64::from(leverage);
        self.market.entry_price * (1.0 + self.fees.leverage_fee_roundtrip / leverage)
    }

    /// Price at which a leveraged long is wiped out:
    /// `entry * (1 - 1 / leverage)`.
    ///
    /// Rises toward the entry price as leverage grows; exactly 0 at 1x.
    pub fn liquidation_price(&self, leverage: u32) -> f64 {
        let leverage = f64::from(leverage);
        self.market.entry_price * (1.0 - 1.0 / leverage)
    }

    /// Unleveraged PnL percentage at the target price, net of the spot
    /// roundtrip fee and clamped at zero.
    pub fn spot_pnl_percent(&self, target_price: f64) -> f64 {
        let gross = (target_price - self.market.entry_price) * self.market.order_size;
        let net = gross * (1.0 - self.fees.spot_fee_roundtrip);
        let pct = net / self.market.notional() * 100.0;
        pct.max(0.0)
    }

    /// Signed leveraged PnL percentage at the target price.
    ///
    /// Gross PnL on the notional, minus the flat roundtrip trading fee and
    /// the borrow fee over the timeframe, relative to the initial capital.
    /// Negative below the fee-adjusted breakeven; callers filter viability.
    pub fn leverage_pnl_percent(
        &self,
        target_price: f64,
        leverage: u32,
        timeframe_days: u32,
    ) -> f64 {
        let capital = self.market.notional();
        let gross =
            (target_price - self.market.entry_price) * self.market.order_size * f64::from(leverage);
        let trading_fee = capital * self.fees.leverage_fee_roundtrip;
        let borrow = self.borrow_fees(leverage, timeframe_days);
        (gross - trading_fee - borrow) / capital * 100.0
    }

    /// Borrow fees on the leveraged portion of the position over the
    /// timeframe. Zero at or below 1x, where nothing is borrowed.
    pub fn borrow_fees(&self, leverage: u32, timeframe_days: u32) -> f64 {
        if leverage <= 1 {
            return 0.0;
        }
        let position_value = self.market.notional();
        let margin = position_value / f64::from(leverage);
        (position_value - margin) * self.fees.daily_borrow_rate * f64::from(timeframe_days)
    }

    // ========== Leverage search ==========

    /// Search leverages 1..=max for the tier and recommend the one with the
    /// highest projected PnL, subject to the viability constraints.
    ///
    /// A candidate is viable when its liquidation price sits below the
    /// tier's safety cap (`entry * (1 - min_liquidation_distance)`) and the
    /// target clears its trading-fee breakeven. The update is strictly
    /// greater-than, so equal-PnL candidates resolve to the lowest
    /// leverage. Timeframe must be positive; callers validate that before
    /// invoking.
    pub fn suggest_trade(
        &self,
        target_price: f64,
        timeframe_days: u32,
        risk_level: RiskLevel,
    ) -> TradeSuggestion {
        let entry = self.market.entry_price;

        if target_price <= entry {
            return TradeSuggestion::none(format!(
                "Target price {:.2} must be above the entry price {:.2}; \
                 this planner only projects upside moves.",
                target_price, entry
            ));
        }

        let profile = risk_level.profile();
        let safety_cap = entry * (1.0 - profile.min_liquidation_distance);

        let mut best: Option<(u32, f64)> = None;
        for candidate in 1..=profile.max_leverage {
            if self.liquidation_price(candidate) >= safety_cap {
                continue;
            }
            if target_price <= self.breakeven_price(candidate) {
                continue;
            }
            let pnl_pct = self.leverage_pnl_percent(target_price, candidate, timeframe_days);
            if best.map_or(true, |(_, top)| pnl_pct > top) {
                best = Some((candidate, pnl_pct));
            }
        }

        debug!(
            target_price,
            days = timeframe_days,
            risk = %risk_level,
            best = ?best,
            "leverage search finished"
        );

        match best {
            Some((leverage, pnl_pct)) => {
                let liquidation = round2(self.liquidation_price(leverage));
                let breakeven = round2(self.breakeven_price(leverage));
                let borrow = round2(self.borrow_fees(leverage, timeframe_days));
                let pnl_pct = round2(pnl_pct);
                let message = format!(
                    "{}x leverage maximizes projected PnL at {:.2}% over {} days \
                     (liquidation {:.2}, breakeven {:.2}).",
                    leverage, pnl_pct, timeframe_days, liquidation, breakeven
                );
                TradeSuggestion::viable(leverage, pnl_pct, liquidation, breakeven, borrow, message)
            }
            None => TradeSuggestion::none(format!(
                "No leverage from 1x to {}x keeps liquidation at least {:.0}% below \
                 entry while clearing breakeven at this target.",
                profile.max_leverage,
                profile.min_liquidation_distance * 100.0
            )),
        }
    }
}
