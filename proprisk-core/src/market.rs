//! Market-cycle phase detection
//!
//! The phase is read directly from price movement and sales activity. It is
//! never derived from the category ratings.

use crate::property::{PriceMovement, SalesActivity};
use serde::{Deserialize, Serialize};

/// Position of the local market in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketCyclePhase {
    Growth,
    Peak,
    Decline,
    Recovery,
    Stable,
}

impl MarketCyclePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketCyclePhase::Growth => "Growth",
            MarketCyclePhase::Peak => "Peak",
            MarketCyclePhase::Decline => "Decline",
            MarketCyclePhase::Recovery => "Recovery",
            MarketCyclePhase::Stable => "Stable",
        }
    }

    /// Adjustment applied to the Market Direction score for this phase
    pub fn direction_adjustment(&self) -> f64 {
        match self {
            MarketCyclePhase::Growth | MarketCyclePhase::Recovery => -0.5,
            MarketCyclePhase::Peak => 1.0,
            MarketCyclePhase::Decline => 1.5,
            MarketCyclePhase::Stable => 0.0,
        }
    }
}

/// Determine the cycle phase
///
/// | price \ sales | high     | moderate/none | low     |
/// |---------------|----------|---------------|---------|
/// | increasing    | Growth   | Growth        | Peak    |
/// | stable        | Recovery | Stable        | Peak    |
/// | declining     | Recovery | Decline       | Decline |
/// | none/unknown  | Stable   | Stable        | Stable  |
pub fn determine_phase(
    price: Option<PriceMovement>,
    sales: Option<SalesActivity>,
) -> MarketCyclePhase {
    let sales = match sales {
        Some(SalesActivity::High) => Some(SalesActivity::High),
        Some(SalesActivity::Low) => Some(SalesActivity::Low),
        _ => None,
    };

    match (price, sales) {
        (Some(PriceMovement::Increasing), Some(SalesActivity::Low)) => MarketCyclePhase::Peak,
        (Some(PriceMovement::Increasing), _) => MarketCyclePhase::Growth,
        (Some(PriceMovement::Stable), Some(SalesActivity::High)) => MarketCyclePhase::Recovery,
        (Some(PriceMovement::Stable), Some(SalesActivity::Low)) => MarketCyclePhase::Peak,
        (Some(PriceMovement::Declining), Some(SalesActivity::High)) => MarketCyclePhase::Recovery,
        (Some(PriceMovement::Declining), _) => MarketCyclePhase::Decline,
        _ => MarketCyclePhase::Stable,
    }
}
