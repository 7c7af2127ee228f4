//! Rating arithmetic and risk level classification
//!
//! Global invariants enforced:
//! - Every rating is an integer in 1..=5
//! - Rounding is half-up, applied once after all adjustments
//! - Classification is monotonic in the score

use serde::{Deserialize, Serialize};

/// Lowest possible rating
pub const MIN_RATING: u8 = 1;
/// Highest possible rating
pub const MAX_RATING: u8 = 5;

/// The seven assessed categories, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Location,
    Planning,
    Environmental,
    MarketActivity,
    MarketDirection,
    EconomicImpact,
    MarketSegment,
}

impl RiskCategory {
    /// All categories in fixed evaluation order
    pub const ALL: [RiskCategory; 7] = [
        RiskCategory::Location,
        RiskCategory::Planning,
        RiskCategory::Environmental,
        RiskCategory::MarketActivity,
        RiskCategory::MarketDirection,
        RiskCategory::EconomicImpact,
        RiskCategory::MarketSegment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Location => "Location/Neighbourhood",
            RiskCategory::Planning => "Land/Planning",
            RiskCategory::Environmental => "Environmental",
            RiskCategory::MarketActivity => "Market Activity",
            RiskCategory::MarketDirection => "Market Direction",
            RiskCategory::EconomicImpact => "Economic Impact",
            RiskCategory::MarketSegment => "Market Segment",
        }
    }

    /// Starting score before any adjustment
    pub fn baseline(&self) -> f64 {
        match self {
            RiskCategory::Planning | RiskCategory::Environmental => 2.0,
            _ => 3.0,
        }
    }
}

/// Qualitative risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,  // <= 1.5
    Low,      // 1.5-2.5
    Moderate, // 2.5-3.5
    High,     // 3.5-4.5
    VeryHigh, // > 4.5
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "very low",
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very high",
        }
    }
}

/// Round half-up, then clamp to 1..=5
///
/// Non-finite scores cannot arise from the adjustment tables, but NaN is mapped
/// to the lowest rating so the range invariant holds unconditionally.
pub fn clamp_rating(score: f64) -> u8 {
    if score.is_nan() {
        return MIN_RATING;
    }
    let rounded = (score + 0.5).floor();
    rounded.clamp(MIN_RATING as f64, MAX_RATING as f64) as u8
}

/// Classify a (possibly fractional) score on the five-bucket scale
pub fn classify(score: f64) -> RiskLevel {
    if score <= 1.5 {
        RiskLevel::VeryLow
    } else if score <= 2.5 {
        RiskLevel::Low
    } else if score <= 3.5 {
        RiskLevel::Moderate
    } else if score <= 4.5 {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    }
}

/// Mean of a set of ratings (0.0 for an empty set)
pub fn mean_rating(ratings: &[u8]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let total: u32 = ratings.iter().map(|&r| r as u32).sum();
    total as f64 / ratings.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_rating_rounds_half_up() {
        assert_eq!(clamp_rating(1.5), 2);
        assert_eq!(clamp_rating(2.5), 3);
        assert_eq!(clamp_rating(2.49), 2);
        assert_eq!(clamp_rating(3.0), 3);
    }

    #[test]
    fn test_clamp_rating_bounds() {
        assert_eq!(clamp_rating(-2.0), 1);
        assert_eq!(clamp_rating(0.0), 1);
        assert_eq!(clamp_rating(6.5), 5);
        assert_eq!(clamp_rating(f64::NAN), 1);
        assert_eq!(clamp_rating(f64::INFINITY), 5);
    }

    #[test]
    fn test_classify_buckets() {
        assert_eq!(classify(1.0), RiskLevel::VeryLow);
        assert_eq!(classify(1.5), RiskLevel::VeryLow);
        assert_eq!(classify(2.0), RiskLevel::Low);
        assert_eq!(classify(2.5), RiskLevel::Low);
        assert_eq!(classify(3.5), RiskLevel::Moderate);
        assert_eq!(classify(4.5), RiskLevel::High);
        assert_eq!(classify(4.51), RiskLevel::VeryHigh);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let mut previous = classify(1.0);
        for step in 0..=40 {
            let level = classify(1.0 + step as f64 * 0.1);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn test_mean_rating() {
        assert_eq!(mean_rating(&[]), 0.0);
        assert_eq!(mean_rating(&[2, 1, 2, 2, 2, 3, 2]), 2.0);
    }

    #[test]
    fn test_category_order_and_baselines() {
        assert_eq!(RiskCategory::ALL[0], RiskCategory::Location);
        assert_eq!(RiskCategory::ALL[6], RiskCategory::MarketSegment);
        assert_eq!(RiskCategory::Planning.baseline(), 2.0);
        assert_eq!(RiskCategory::Environmental.baseline(), 2.0);
        assert_eq!(RiskCategory::Location.baseline(), 3.0);
    }
}
