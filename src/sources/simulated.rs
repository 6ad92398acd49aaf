//! Simulated Price Feed
//!
//! Stands in for real exchange connectivity: after a short artificial
//! delay it returns the configured base price with a little random jitter,
//! stamped into a market snapshot. The snapshot is fetched once at startup
//! and the planner treats it as read-only from then on.

use crate::error::{AppError, Result};
use crate::types::MarketSnapshot;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info};

const MIN_LATENCY_MS: u64 = 120;
const MAX_LATENCY_MS: u64 = 450;

/// Simulated market data source for a single symbol.
#[derive(Debug, Clone)]
pub struct SimulatedFeed {
    symbol: String,
    base_price: f64,
    order_size: f64,
    /// Maximum price swing as a fraction of the base price.
    jitter: f64,
}

impl SimulatedFeed {
    /// Create a feed around a base price with the given jitter fraction.
    pub fn new(symbol: impl Into<String>, base_price: f64, order_size: f64, jitter: f64) -> Self {
        Self {
            symbol: symbol.into(),
            base_price,
            order_size,
            jitter: jitter.abs(),
        }
    }

    /// Fetch the current market snapshot.
    ///
    /// Sleeps for a randomized latency to mimic a network round trip, then
    /// answers with the jittered base price. Fails only when the feed was
    /// configured with a non-positive base price.
    pub async fn fetch(&self) -> Result<MarketSnapshot> {
        if self.base_price <= 0.0 {
            return Err(AppError::Feed(format!(
                "base price {} must be positive",
                self.base_price
            )));
        }

        // ThreadRng is not Send, so draw everything before sleeping.
        let (price, latency_ms) = {
            let mut rng = rand::thread_rng();
            let swing = if self.jitter > 0.0 {
                rng.gen_range(-self.jitter..=self.jitter)
            } else {
                0.0
            };
            let latency = rng.gen_range(MIN_LATENCY_MS..=MAX_LATENCY_MS);
            (self.base_price * (1.0 + swing), latency)
        };

        debug!(symbol = %self.symbol, latency_ms, "simulating feed latency");
        tokio::time::sleep(Duration::from_millis(latency_ms)).await;

        info!(symbol = %self.symbol, price, "simulated feed answered");
        Ok(MarketSnapshot::new(self.symbol.clone(), price, self.order_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_stays_within_jitter_band() {
        let feed = SimulatedFeed::new("SUI", 4.0, 100.0, 0.02);
        let snapshot = feed.fetch().await.unwrap();

        assert_eq!(snapshot.symbol, "SUI");
        assert_eq!(snapshot.order_size, 100.0);
        assert!(snapshot.entry_price >= 4.0 * 0.98);
        assert!(snapshot.entry_price <= 4.0 * 1.02);
    }

    #[tokio::test]
    async fn test_fetch_with_zero_jitter_returns_base_price() {
        let feed = SimulatedFeed::new("SUI", 4.0, 1.0, 0.0);
        let snapshot = feed.fetch().await.unwrap();
        assert_eq!(snapshot.entry_price, 4.0);
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_positive_base_price() {
        let feed = SimulatedFeed::new("SUI", 0.0, 1.0, 0.02);
        let err = feed.fetch().await.unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }
}
