//! Property attribute records
//!
//! Every field is optional. An absent field never fails evaluation; it only
//! means the adjustments keyed on that field are skipped.
//!
//! The JSON form uses camelCase keys (`proximityToTransport`, `floodZone`,
//! `marketConditions`, ...) so records exported by valuation front ends can be
//! read without translation.

use serde::{Deserialize, Serialize};

/// Attributes describing a single property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoning: Option<String>,
    /// Land area in square meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_area: Option<f64>,
    /// Building (floor) area in square meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_spaces: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_type: Option<String>,
    /// Distance to the nearest main road in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_to_main_road: Option<f64>,
    /// Distance to public transport in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_to_transport: Option<f64>,
    /// Distance to shops in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_to_shops: Option<f64>,
    /// Distance to schools in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_to_schools: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flood_zone: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bushfire_zone: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coastal_zone: Option<bool>,
    /// Free-form restriction tags such as "Heritage overlay" or "Sewer easement"
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub planning_restrictions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_conditions: Option<MarketConditions>,
}

/// Local market indicators for the property's area
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_on_market: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_movement: Option<PriceMovement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_activity: Option<SalesActivity>,
    /// Rental vacancy rate as a percentage (2.5 means 2.5%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_vacancy: Option<f64>,
}

/// Direction of recent price movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceMovement {
    Increasing,
    Stable,
    Declining,
    /// Any value the scorer does not recognise; triggers no adjustment
    #[serde(other)]
    Unknown,
}

/// Volume of recent sales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesActivity {
    High,
    Moderate,
    Low,
    #[serde(other)]
    Unknown,
}

impl PropertyAttributes {
    /// Price movement, if market conditions carry one
    pub fn price_movement(&self) -> Option<PriceMovement> {
        self.market_conditions
            .as_ref()
            .and_then(|m| m.price_movement)
    }

    /// Sales activity, if market conditions carry one
    pub fn sales_activity(&self) -> Option<SalesActivity> {
        self.market_conditions
            .as_ref()
            .and_then(|m| m.sales_activity)
    }

    /// True when the property type names a house
    pub fn is_house(&self) -> bool {
        self.property_type_contains("house")
    }

    /// Case-insensitive substring match on the property type
    pub fn property_type_contains(&self, needle: &str) -> bool {
        self.property_type
            .as_deref()
            .map(|t| t.to_ascii_lowercase().contains(needle))
            .unwrap_or(false)
    }

    /// Case-insensitive whole-word match on the property type ("unit" matches
    /// "Unit" and "Units" but not "Community Title")
    pub fn property_type_has_word(&self, word: &str) -> bool {
        let plural = format!("{}s", word);
        self.property_type
            .as_deref()
            .map(|t| {
                t.to_ascii_lowercase()
                    .split(|c: char| !c.is_ascii_alphanumeric())
                    .any(|token| token == word || token == plural)
            })
            .unwrap_or(false)
    }

    /// Human-readable label: address, else suburb/state, else None
    pub fn label(&self) -> Option<String> {
        if let Some(address) = self.address.as_deref().filter(|a| !a.trim().is_empty()) {
            return Some(address.trim().to_string());
        }
        match (self.suburb.as_deref(), self.state.as_deref()) {
            (Some(suburb), Some(state)) => Some(format!("{} {}", suburb.trim(), state.trim())),
            (Some(suburb), None) => Some(suburb.trim().to_string()),
            (None, Some(state)) => Some(state.trim().to_string()),
            (None, None) => None,
        }
    }
}
