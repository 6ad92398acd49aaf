use serde::{Deserialize, Serialize};

/// Result record produced by the leverage search.
///
/// `optimal_leverage` of 0 means no suitable leverage exists for the given
/// inputs (target at or below entry, or no candidate passed the viability
/// constraints); the `message` says which. Numeric fields are rounded to
/// two decimals for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSuggestion {
    /// Recommended leverage multiplier, 0 if none was found.
    pub optimal_leverage: u32,
    /// Projected PnL percentage at the recommended leverage.
    pub potential_pnl_pct: f64,
    /// Liquidation price at the recommended leverage.
    pub liquidation_price: f64,
    /// Breakeven price at the recommended leverage.
    pub breakeven_price: f64,
    /// Estimated borrow fees over the timeframe, absent when no leverage
    /// was selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_borrow_fees: Option<f64>,
    /// Human-readable explanation of the outcome.
    pub message: String,
}

impl TradeSuggestion {
    /// Build a suggestion for a viable leverage pick.
    pub fn viable(
        optimal_leverage: u32,
        potential_pnl_pct: f64,
        liquidation_price: f64,
        breakeven_price: f64,
        estimated_borrow_fees: f64,
        message: String,
    ) -> Self {
        Self {
            optimal_leverage,
            potential_pnl_pct,
            liquidation_price,
            breakeven_price,
            estimated_borrow_fees: Some(estimated_borrow_fees),
            message,
        }
    }

    /// Build the zeroed record used when no leverage qualifies.
    pub fn none(message: String) -> Self {
        Self {
            optimal_leverage: 0,
            potential_pnl_pct: 0.0,
            liquidation_price: 0.0,
            breakeven_price: 0.0,
            estimated_borrow_fees: None,
            message,
        }
    }

    /// Whether the search produced a usable leverage.
    pub fn is_viable(&self) -> bool {
        self.optimal_leverage > 0
    }
}
