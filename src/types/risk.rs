use serde::{Deserialize, Serialize};

/// Risk tolerance tier for the leverage search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Medium
    }
}

/// Search constraints for a risk tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    /// Highest leverage multiplier the search will consider.
    pub max_leverage: u32,
    /// Minimum required gap between liquidation price and entry price,
    /// as a fraction of the entry price.
    pub min_liquidation_distance: f64,
}

impl RiskLevel {
    /// Get the risk level from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }

    /// Get all risk levels, from most to least conservative.
    pub fn all() -> Vec<Self> {
        vec![RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]
    }

    /// Get the search constraints for this tier.
    ///
    /// Stricter tiers lower the leverage cap and push the required
    /// liquidation distance out at the same time, so tightening the tier
    /// can only shrink the viable leverage set.
    pub fn profile(&self) -> RiskProfile {
        match self {
            RiskLevel::Low => RiskProfile {
                max_leverage: 5,
                min_liquidation_distance: 0.15, // 15% below entry
            },
            RiskLevel::Medium => RiskProfile {
                max_leverage: 12,
                min_liquidation_distance: 0.08, // 8% below entry
            },
            RiskLevel::High => RiskProfile {
                max_leverage: 20,
                min_liquidation_distance: 0.04, // 4% below entry
            },
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_from_str() {
        assert_eq!(RiskLevel::from_str("low"), Some(RiskLevel::Low));
        assert_eq!(RiskLevel::from_str("medium"), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::from_str("high"), Some(RiskLevel::High));
        assert_eq!(RiskLevel::from_str("extreme"), None);
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(RiskLevel::default(), RiskLevel::Medium);
    }

    #[test]
    fn test_profiles_tighten_together() {
        let low = RiskLevel::Low.profile();
        let medium = RiskLevel::Medium.profile();
        let high = RiskLevel::High.profile();

        assert!(low.max_leverage < medium.max_leverage);
        assert!(medium.max_leverage < high.max_leverage);
        assert!(low.min_liquidation_distance > medium.min_liquidation_distance);
        assert!(medium.min_liquidation_distance > high.min_liquidation_distance);
    }

    #[test]
    fn test_medium_profile_values() {
        let profile = RiskLevel::Medium.profile();
        assert_eq!(profile.max_leverage, 12);
        assert_eq!(profile.min_liquidation_distance, 0.08);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    }
}
