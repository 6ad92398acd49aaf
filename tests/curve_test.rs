//! Tests for PnL curve sampling
//!
//! Tests cover:
//! - Grid construction (endpoints, spacing, counts)
//! - Agreement between sampled points and the pricing functions
//! - Axis bound helpers used by the chart

use fulcrum::services::{curve, TradePlanner};
use fulcrum::types::*;

fn planner_at(entry_price: f64) -> TradePlanner {
    TradePlanner::new(
        MarketSnapshot::new("SUI", entry_price, 1.0),
        FeeSchedule::default(),
    )
}

// =============================================================================
// Grid Construction Tests
// =============================================================================

mod grid_tests {
    use super::*;

    #[test]
    fn test_endpoints_and_count() {
        let planner = planner_at(4.0);
        let sampled = curve::sample_curve(&planner, 12, 7, 3.2, 6.0, 60);

        assert_eq!(sampled.symbol, "SUI");
        assert_eq!(sampled.leverage, 12);
        assert_eq!(sampled.timeframe_days, 7);
        assert_eq!(sampled.points.len(), 60);
        assert_eq!(sampled.points.first().unwrap().price, 3.2);
        assert_eq!(sampled.points.last().unwrap().price, 6.0);
    }

    #[test]
    fn test_even_spacing() {
        let planner = planner_at(4.0);
        let sampled = curve::sample_curve(&planner, 5, 7, 3.0, 5.0, 21);

        let expected_step = (5.0 - 3.0) / 20.0;
        for pair in sampled.points.windows(2) {
            let step = pair[1].price - pair[0].price;
            assert!((step - expected_step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_degenerate_step_counts_are_raised() {
        let planner = planner_at(4.0);
        for steps in [0, 1, 2] {
            let sampled = curve::sample_curve(&planner, 5, 7, 3.0, 5.0, steps);
            assert_eq!(sampled.points.len(), 2);
        }
    }

    #[test]
    fn test_default_window_brackets_entry_and_target() {
        let (low, high) = curve::default_window(4.0, 5.0);
        assert!((low - 3.2).abs() < 1e-9);
        assert!((high - 6.0).abs() < 1e-9);
    }
}

// =============================================================================
// Pricing Agreement Tests
// =============================================================================

mod agreement_tests {
    use super::*;

    #[test]
    fn test_points_match_pricing_functions() {
        let planner = planner_at(4.0);
        let sampled = curve::sample_curve(&planner, 8, 14, 3.2, 6.0, 30);

        for point in &sampled.points {
            let leveraged = planner.leverage_pnl_percent(point.price, 8, 14);
            let spot = planner.spot_pnl_percent(point.price);
            assert_eq!(point.leveraged_pnl_pct, leveraged);
            assert_eq!(point.spot_pnl_pct, spot);
        }
    }

    #[test]
    fn test_leveraged_pnl_negative_below_entry_spot_clamped() {
        let planner = planner_at(4.0);
        let sampled = curve::sample_curve(&planner, 10, 7, 3.0, 3.9, 10);

        for point in &sampled.points {
            assert!(point.leveraged_pnl_pct < 0.0);
            assert_eq!(point.spot_pnl_pct, 0.0);
        }
    }
}

// =============================================================================
// Axis Bound Tests
// =============================================================================

mod bounds_tests {
    use super::*;

    #[test]
    fn test_pnl_bounds_cover_all_points() {
        let planner = planner_at(4.0);
        let sampled = curve::sample_curve(&planner, 12, 7, 3.2, 6.0, 40);
        let (lo, hi) = sampled.pnl_bounds();

        assert!(lo < hi);
        for point in &sampled.points {
            assert!(point.leveraged_pnl_pct >= lo);
            assert!(point.leveraged_pnl_pct <= hi);
        }
    }

    #[test]
    fn test_price_bounds_are_the_endpoints() {
        let planner = planner_at(4.0);
        let sampled = curve::sample_curve(&planner, 12, 7, 3.2, 6.0, 40);
        assert_eq!(sampled.price_bounds(), (3.2, 6.0));
    }

    #[test]
    fn test_empty_curve_bounds_are_zero() {
        let empty = PnlCurve {
            symbol: "SUI".to_string(),
            leverage: 5,
            timeframe_days: 7,
            points: vec![],
        };

        assert_eq!(empty.pnl_bounds(), (0.0, 0.0));
        assert_eq!(empty.price_bounds(), (0.0, 0.0));
    }
}
