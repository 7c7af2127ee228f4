//! Rule-based property risk scoring
//!
//! Each category starts from a baseline, applies additive adjustments keyed on
//! attribute thresholds, then rounds and clamps to 1..=5.
//!
//! Global invariants enforced:
//! - Evaluation is pure: no I/O, no logging, no clocks
//! - Identical input yields an identical result
//! - Absent fields skip their adjustment and never fail evaluation
//! - Categories are evaluated and reported in `RiskCategory::ALL` order

use crate::market::{self, MarketCyclePhase};
use crate::postcodes::{normalize_state, PremiumPostcodes};
use crate::property::{PriceMovement, PropertyAttributes, SalesActivity};
use crate::risk::{classify, clamp_rating, mean_rating, RiskCategory, RiskLevel};
use serde::{Deserialize, Serialize};

/// Default minimum rating for a category to count as a key risk
pub const DEFAULT_KEY_RISK_MIN_RATING: u8 = 4;
/// Default cap on reported key risk factors
pub const DEFAULT_MAX_KEY_RISK_FACTORS: usize = 3;

/// Tunable scorer inputs that are data rather than rules
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerSettings {
    pub premium_postcodes: PremiumPostcodes,
    pub key_risk_min_rating: u8,
    pub max_key_risk_factors: usize,
}

impl Default for ScorerSettings {
    fn default() -> Self {
        ScorerSettings {
            premium_postcodes: PremiumPostcodes::builtin(),
            key_risk_min_rating: DEFAULT_KEY_RISK_MIN_RATING,
            max_key_risk_factors: DEFAULT_MAX_KEY_RISK_FACTORS,
        }
    }
}

/// Assessment of a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryAssessment {
    pub category: RiskCategory,
    pub rating: u8,
    pub level: RiskLevel,
    pub summary: String,
    pub factors: Vec<String>,
}

/// Result of assessing one property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RiskAssessmentResult {
    pub categories: Vec<CategoryAssessment>,
    pub key_risk_factors: Vec<String>,
    pub market_cycle_phase: MarketCyclePhase,
}

impl RiskAssessmentResult {
    /// Ratings in category order
    pub fn ratings(&self) -> Vec<u8> {
        self.categories.iter().map(|c| c.rating).collect()
    }

    /// Mean of all category ratings
    pub fn average_rating(&self) -> f64 {
        mean_rating(&self.ratings())
    }

    /// Overall risk level, derived from the mean rating
    pub fn overall_risk(&self) -> RiskLevel {
        classify(self.average_rating())
    }

    /// Look up one category's assessment
    pub fn category(&self, category: RiskCategory) -> Option<&CategoryAssessment> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Rating for one category (0 if the category is missing)
    pub fn rating(&self, category: RiskCategory) -> u8 {
        self.category(category).map(|c| c.rating).unwrap_or(0)
    }
}

/// Running score for one category
struct Tally {
    score: f64,
    factors: Vec<String>,
}

impl Tally {
    fn new(category: RiskCategory) -> Self {
        Tally {
            score: category.baseline(),
            factors: Vec::new(),
        }
    }

    fn adjust(&mut self, delta: f64, factor: String) {
        self.score += delta;
        self.factors.push(factor);
    }

    fn set(&mut self, score: f64, factor: String) {
        self.score = score;
        self.factors.push(factor);
    }

    fn finish(self, category: RiskCategory) -> CategoryAssessment {
        let rating = clamp_rating(self.score);
        let level = classify(rating as f64);
        CategoryAssessment {
            category,
            rating,
            level,
            summary: summarize(category, rating, level),
            factors: self.factors,
        }
    }
}

/// The property risk scorer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskScorer {
    settings: ScorerSettings,
}

impl RiskScorer {
    pub fn new(settings: ScorerSettings) -> Self {
        RiskScorer { settings }
    }

    pub fn settings(&self) -> &ScorerSettings {
        &self.settings
    }

    /// Assess a property across all seven categories
    pub fn evaluate(&self, property: &PropertyAttributes) -> RiskAssessmentResult {
        let phase = market::determine_phase(property.price_movement(), property.sales_activity());

        let categories: Vec<CategoryAssessment> = RiskCategory::ALL
            .iter()
            .map(|&category| {
                let tally = match category {
                    RiskCategory::Location => self.location(property),
                    RiskCategory::Planning => planning(property),
                    RiskCategory::Environmental => environmental(property),
                    RiskCategory::MarketActivity => market_activity(property),
                    RiskCategory::MarketDirection => market_direction(property, phase),
                    RiskCategory::EconomicImpact => economic_impact(property),
                    RiskCategory::MarketSegment => market_segment(property),
                };
                tally.finish(category)
            })
            .collect();

        let key_risk_factors = categories
            .iter()
            .filter(|c| c.rating >= self.settings.key_risk_min_rating)
            .take(self.settings.max_key_risk_factors)
            .map(|c| c.summary.clone())
            .collect();

        RiskAssessmentResult {
            categories,
            key_risk_factors,
            market_cycle_phase: phase,
        }
    }

    fn location(&self, p: &PropertyAttributes) -> Tally {
        let mut t = Tally::new(RiskCategory::Location);

        if let Some(d) = p.proximity_to_transport {
            if d < 800.0 {
                t.adjust(-1.0, format!("Close to public transport ({:.0}m)", d));
            } else if d > 2000.0 {
                t.adjust(1.0, format!("Distant from public transport ({:.0}m)", d));
            }
        }
        if let Some(d) = p.proximity_to_shops {
            if d < 1000.0 {
                t.adjust(-0.5, format!("Walking distance to shops ({:.0}m)", d));
            }
        }
        if let Some(d) = p.proximity_to_schools {
            if d < 1500.0 {
                t.adjust(-0.5, format!("Close to schools ({:.0}m)", d));
            }
        }
        if let Some(postcode) = p.postcode.as_deref() {
            if self
                .settings
                .premium_postcodes
                .is_premium(p.state.as_deref(), postcode)
            {
                t.adjust(-1.0, format!("Premium postcode ({})", postcode.trim()));
            }
        }
        if let Some(d) = p.proximity_to_main_road {
            if d < 100.0 {
                t.adjust(1.0, format!("Main road exposure ({:.0}m)", d));
            }
        }

        t
    }
}

/// Assess a property with the default scorer
pub fn evaluate(property: &PropertyAttributes) -> RiskAssessmentResult {
    RiskScorer::default().evaluate(property)
}

/// Zoning rule for a zoning string, as (rating, description)
///
/// The R1/RU1, R3/R4 and IN codes may appear anywhere in the string. A bare
/// `B` only counts inside a code-like token (one carrying a digit, such as
/// `B4`), so words like "SUBURBAN" do not read as business zoning.
fn zoning_rule(zoning: &str) -> Option<(f64, &'static str)> {
    let upper = zoning.to_ascii_uppercase();
    let has_business_code = upper
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| token.chars().any(|c| c.is_ascii_digit()))
        .any(|token| token.contains('B'));

    if upper.contains("R1") || upper.contains("RU1") {
        Some((1.0, "Low-density residential zoning"))
    } else if upper.contains("R3") || upper.contains("R4") {
        Some((3.0, "Medium/high-density residential zoning"))
    } else if has_business_code || upper.contains("IN") {
        Some((4.0, "Commercial or industrial zoning"))
    } else {
        None
    }
}

fn planning(p: &PropertyAttributes) -> Tally {
    let mut t = Tally::new(RiskCategory::Planning);

    if let Some(zoning) = p.zoning.as_deref() {
        if let Some((rating, description)) = zoning_rule(zoning) {
            t.set(rating, format!("{} ({})", description, zoning.trim()));
        }
    }

    let has_restriction = |needle: &str| {
        p.planning_restrictions
            .iter()
            .any(|r| r.to_ascii_lowercase().contains(needle))
    };
    if has_restriction("heritage") {
        t.adjust(1.0, "Heritage restriction".to_string());
    }
    if has_restriction("flood") {
        t.adjust(2.0, "Flood planning restriction".to_string());
    }
    if has_restriction("easement") {
        t.adjust(0.5, "Easement on title".to_string());
    }

    t
}

fn environmental(p: &PropertyAttributes) -> Tally {
    let mut t = Tally::new(RiskCategory::Environmental);

    if p.flood_zone == Some(true) {
        t.adjust(2.0, "Located in flood zone".to_string());
    }
    if p.bushfire_zone == Some(true) {
        t.adjust(1.5, "Located in bushfire-prone area".to_string());
    }
    if p.coastal_zone == Some(true) {
        t.adjust(0.5, "Coastal exposure".to_string());
    }
    if let Some(year) = p.year_built {
        if year < 1960 {
            t.adjust(1.0, format!("Older construction (built {})", year));
        } else if year > 2000 {
            t.adjust(-0.5, format!("Modern construction (built {})", year));
        }
    }
    if let Some(d) = p.proximity_to_main_road {
        if d < 200.0 {
            t.adjust(0.5, format!("Traffic noise and pollution ({:.0}m to main road)", d));
        }
    }

    t
}

fn market_activity(p: &PropertyAttributes) -> Tally {
    let mut t = Tally::new(RiskCategory::MarketActivity);
    let Some(m) = p.market_conditions.as_ref() else {
        return t;
    };

    if let Some(days) = m.days_on_market {
        if days < 30.0 {
            t.adjust(-1.0, format!("Quick sales ({:.0} days on market)", days));
        } else if days > 90.0 {
            t.adjust(1.0, format!("Slow sales ({:.0} days on market)", days));
        }
    }
    match m.sales_activity {
        Some(SalesActivity::High) => t.adjust(-1.0, "High sales activity".to_string()),
        Some(SalesActivity::Low) => t.adjust(1.0, "Low sales activity".to_string()),
        _ => {}
    }
    if let Some(vacancy) = m.rental_vacancy {
        if vacancy < 2.0 {
            t.adjust(-0.5, format!("Tight rental market ({}% vacancy)", vacancy));
        } else if vacancy > 5.0 {
            t.adjust(1.0, format!("High rental vacancy ({}%)", vacancy));
        }
    }

    t
}

fn market_direction(p: &PropertyAttributes, phase: MarketCyclePhase) -> Tally {
    let mut t = Tally::new(RiskCategory::MarketDirection);

    match p.price_movement() {
        Some(PriceMovement::Increasing) => t.set(2.0, "Prices increasing".to_string()),
        Some(PriceMovement::Declining) => t.set(4.0, "Prices declining".to_string()),
        Some(PriceMovement::Stable) => t.set(3.0, "Prices stable".to_string()),
        Some(PriceMovement::Unknown) | None => {}
    }

    let delta = phase.direction_adjustment();
    if delta != 0.0 {
        t.adjust(delta, format!("{} phase of market cycle", phase.as_str()));
    }

    t
}

fn economic_impact(p: &PropertyAttributes) -> Tally {
    let mut t = Tally::new(RiskCategory::EconomicImpact);

    if let Some(state) = p.state.as_deref() {
        let state = normalize_state(state);
        let baseline = match state.as_str() {
            "NSW" | "VIC" => Some(2.0),
            "QLD" => Some(2.5),
            "WA" => Some(3.5),
            "SA" | "TAS" => Some(3.0),
            _ => None,
        };
        if let Some(b) = baseline {
            t.set(b, format!("{} economic outlook", state));
        }
    }
    if p.property_type_contains("apartment") || p.property_type_has_word("unit") {
        t.adjust(0.5, "Apartment stock sensitive to supply".to_string());
    } else if p.is_house() {
        t.adjust(-0.5, "Detached house holds value in downturns".to_string());
    }

    t
}

fn market_segment(p: &PropertyAttributes) -> Tally {
    let mut t = Tally::new(RiskCategory::MarketSegment);

    if let (Some(bed), Some(bath)) = (p.bedrooms, p.bathrooms) {
        if bed >= 3 && bath >= 2 {
            t.adjust(
                -0.5,
                format!("Family configuration ({} bed, {} bath)", bed, bath),
            );
        }
    }
    if let Some(bed) = p.bedrooms {
        if bed <= 1 {
            t.adjust(0.5, format!("Limited bedrooms ({})", bed));
        }
    }
    if let Some(area) = p.building_area {
        if area < 50.0 {
            t.adjust(1.0, format!("Small building area ({:.0}m²)", area));
        } else if area > 200.0 {
            t.adjust(-0.5, format!("Large building area ({:.0}m²)", area));
        }
    }
    if p.is_house() {
        if let Some(land) = p.land_area {
            if land < 300.0 {
                t.adjust(0.5, format!("Small land holding ({:.0}m²)", land));
            } else if land > 800.0 {
                t.adjust(-0.5, format!("Large land holding ({:.0}m²)", land));
            }
        }
    }
    if let Some(cars) = p.car_spaces {
        if cars == 0 {
            t.adjust(1.0, "No off-street parking".to_string());
        } else if cars >= 2 {
            t.adjust(-0.5, format!("Multiple car spaces ({})", cars));
        }
    }

    t
}

/// Category summary for a final rating
fn summarize(category: RiskCategory, rating: u8, level: RiskLevel) -> String {
    let (favourable, neutral, adverse) = match category {
        RiskCategory::Location => (
            "convenient access to transport and amenities",
            "typical access to transport and amenities",
            "limited amenity access or main-road exposure",
        ),
        RiskCategory::Planning => (
            "low-density zoning with few planning constraints",
            "standard zoning and planning controls",
            "intensive zoning or significant planning restrictions",
        ),
        RiskCategory::Environmental => (
            "no significant environmental hazards identified",
            "some environmental or building-age considerations",
            "exposure to natural hazards such as flood or bushfire",
        ),
        RiskCategory::MarketActivity => (
            "strong buyer demand with quick sales",
            "average levels of market activity",
            "weak demand with extended selling periods",
        ),
        RiskCategory::MarketDirection => (
            "prices trending upward",
            "prices broadly stable",
            "prices under downward pressure",
        ),
        RiskCategory::EconomicImpact => (
            "supported by a strong state economy",
            "average exposure to economic conditions",
            "exposed to a more volatile regional economy",
        ),
        RiskCategory::MarketSegment => (
            "configuration suits a broad buyer pool",
            "configuration has typical market appeal",
            "configuration appeals to a narrow buyer pool",
        ),
    };
    let description = match rating {
        0..=2 => favourable,
        3 => neutral,
        _ => adverse,
    };
    format!(
        "{} risk is {}: {}",
        category.as_str(),
        level.as_str(),
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::MarketConditions;

    fn worst_case() -> PropertyAttributes {
        PropertyAttributes {
            state: Some("WA".to_string()),
            property_type: Some("Apartment".to_string()),
            zoning: Some("IN1 General Industrial".to_string()),
            proximity_to_transport: Some(3000.0),
            proximity_to_main_road: Some(50.0),
            flood_zone: Some(true),
            bushfire_zone: Some(true),
            planning_restrictions: vec!["Flood planning area".to_string()],
            bedrooms: Some(1),
            building_area: Some(40.0),
            car_spaces: Some(0),
            market_conditions: Some(MarketConditions {
                days_on_market: Some(120.0),
                price_movement: Some(PriceMovement::Declining),
                sales_activity: Some(SalesActivity::Low),
                rental_vacancy: Some(6.0),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_property_returns_baselines() {
        let result = evaluate(&PropertyAttributes::default());
        assert_eq!(result.ratings(), vec![3, 2, 2, 3, 3, 3, 3]);
        for c in &result.categories {
            assert!(!c.summary.is_empty());
            assert!(c.factors.is_empty());
        }
        assert!(result.key_risk_factors.is_empty());
        assert_eq!(result.market_cycle_phase, MarketCyclePhase::Stable);
    }

    #[test]
    fn test_categories_in_fixed_order() {
        let result = evaluate(&worst_case());
        let order: Vec<RiskCategory> = result.categories.iter().map(|c| c.category).collect();
        assert_eq!(order, RiskCategory::ALL.to_vec());
    }

    #[test]
    fn test_flood_zone_raises_environmental() {
        let result = evaluate(&PropertyAttributes {
            flood_zone: Some(true),
            ..Default::default()
        });
        assert_eq!(result.rating(RiskCategory::Environmental), 4);
        assert_eq!(
            result.category(RiskCategory::Environmental).unwrap().factors,
            vec!["Located in flood zone"]
        );
    }

    #[test]
    fn test_end_to_end_example() {
        let property = PropertyAttributes {
            proximity_to_transport: Some(500.0),
            zoning: Some("R1".to_string()),
            flood_zone: Some(false),
            market_conditions: Some(MarketConditions {
                price_movement: Some(PriceMovement::Increasing),
                sales_activity: Some(SalesActivity::High),
                ..Default::default()
            }),
            bedrooms: Some(4),
            bathrooms: Some(2),
            car_spaces: Some(2),
            building_area: Some(220.0),
            ..Default::default()
        };
        let result = evaluate(&property);

        assert!(result.rating(RiskCategory::Location) <= 2);
        assert_eq!(result.rating(RiskCategory::Planning), 1);
        assert!(result.rating(RiskCategory::MarketDirection) <= 2);
        assert!(result.rating(RiskCategory::MarketSegment) <= 2);
        assert_eq!(result.market_cycle_phase, MarketCyclePhase::Growth);
        assert_eq!(result.overall_risk(), RiskLevel::Low);
    }

    #[test]
    fn test_worst_case_key_risks_capped() {
        let result = evaluate(&worst_case());
        assert!(result.categories.iter().all(|c| c.rating >= 4));
        assert_eq!(result.key_risk_factors.len(), 3);
        assert!(result.key_risk_factors[0].starts_with("Location/Neighbourhood"));
        assert!(result.key_risk_factors[1].starts_with("Land/Planning"));
        assert!(result.key_risk_factors[2].starts_with("Environmental"));
        assert_eq!(result.market_cycle_phase, MarketCyclePhase::Decline);
        assert_eq!(result.overall_risk(), RiskLevel::VeryHigh);
    }

    #[test]
    fn test_key_risks_only_from_high_ratings() {
        let result = evaluate(&PropertyAttributes {
            flood_zone: Some(true),
            proximity_to_transport: Some(400.0),
            ..Default::default()
        });
        assert_eq!(result.key_risk_factors.len(), 1);
        assert_eq!(
            result.key_risk_factors[0],
            result.category(RiskCategory::Environmental).unwrap().summary
        );
    }

    #[test]
    fn test_ratings_clamp_at_lower_bound() {
        let result = evaluate(&PropertyAttributes {
            state: Some("NSW".to_string()),
            postcode: Some("2088".to_string()),
            proximity_to_transport: Some(200.0),
            proximity_to_shops: Some(300.0),
            proximity_to_schools: Some(600.0),
            ..Default::default()
        });
        // 3 - 1 - 0.5 - 0.5 - 1 = 0 -> clamped to 1
        assert_eq!(result.rating(RiskCategory::Location), 1);
        assert_eq!(result.category(RiskCategory::Location).unwrap().factors.len(), 4);
    }

    #[test]
    fn test_transport_never_worsens_location() {
        for main_road in [None, Some(50.0), Some(500.0)] {
            let without = PropertyAttributes {
                proximity_to_main_road: main_road,
                ..Default::default()
            };
            let with = PropertyAttributes {
                proximity_to_transport: Some(799.0),
                ..without.clone()
            };
            assert!(
                evaluate(&with).rating(RiskCategory::Location)
                    <= evaluate(&without).rating(RiskCategory::Location)
            );
        }
    }

    #[test]
    fn test_zoning_rules() {
        let rate = |zoning: &str| {
            evaluate(&PropertyAttributes {
                zoning: Some(zoning.to_string()),
                ..Default::default()
            })
            .rating(RiskCategory::Planning)
        };
        assert_eq!(rate("R1 General Residential"), 1);
        assert_eq!(rate("RU1 Primary Production"), 1);
        assert_eq!(rate("R2 Low Density Residential"), 2);
        assert_eq!(rate("R4 High Density Residential"), 3);
        assert_eq!(rate("B4 Mixed Use"), 4);
        assert_eq!(rate("IN2 Light Industrial"), 4);
        assert_eq!(rate(""), 2);

        // Codes count wherever they appear in the string
        assert_eq!(rate("Zone R1"), 1);
        assert_eq!(rate("(R1) General Residential"), 1);
        assert_eq!(rate("Zone B4 Mixed Use"), 4);
        assert_eq!(rate("Zoned IN2"), 4);
        assert_eq!(rate("Residential (R3)"), 3);

        // A bare B in an ordinary word is not a business zone
        assert_eq!(rate("Suburban R2"), 2);
    }

    #[test]
    fn test_planning_restrictions_stack() {
        let result = evaluate(&PropertyAttributes {
            zoning: Some("R1".to_string()),
            planning_restrictions: vec![
                "Heritage Conservation Area".to_string(),
                "Drainage EASEMENT".to_string(),
            ],
            ..Default::default()
        });
        // 1 + 1 + 0.5 = 2.5 -> 3
        assert_eq!(result.rating(RiskCategory::Planning), 3);
        assert_eq!(
            result.category(RiskCategory::Planning).unwrap().factors,
            vec![
                "Low-density residential zoning (R1)",
                "Heritage restriction",
                "Easement on title"
            ]
        );
    }

    #[test]
    fn test_economic_impact_by_state_and_type() {
        let rate = |state: &str, kind: &str| {
            evaluate(&PropertyAttributes {
                state: Some(state.to_string()),
                property_type: Some(kind.to_string()),
                ..Default::default()
            })
            .rating(RiskCategory::EconomicImpact)
        };
        assert_eq!(rate("NSW", "House"), 2); // 2 - 0.5 = 1.5 -> 2
        assert_eq!(rate("vic", "Apartment"), 3); // 2 + 0.5 = 2.5 -> 3
        assert_eq!(rate("QLD", "Townhouse"), 2); // 2.5 - 0.5 = 2
        assert_eq!(rate("WA", "Unit"), 4);
        assert_eq!(rate("NT", "Land"), 3);
        // "Community" must not read as a unit
        assert_eq!(rate("NSW", "Community Title House"), 2);
    }

    #[test]
    fn test_land_area_only_counts_for_houses() {
        let small_block = |kind: &str| PropertyAttributes {
            property_type: Some(kind.to_string()),
            land_area: Some(250.0),
            car_spaces: Some(1),
            ..Default::default()
        };
        let house = evaluate(&small_block("House"));
        let apartment = evaluate(&small_block("Apartment"));
        // 3 + 0.5 = 3.5 -> 4
        assert_eq!(house.rating(RiskCategory::MarketSegment), 4);
        assert_eq!(apartment.rating(RiskCategory::MarketSegment), 3);
    }

    #[test]
    fn test_market_activity_adjustments() {
        let result = evaluate(&PropertyAttributes {
            market_conditions: Some(MarketConditions {
                days_on_market: Some(20.0),
                sales_activity: Some(SalesActivity::High),
                rental_vacancy: Some(1.2),
                ..Default::default()
            }),
            ..Default::default()
        });
        // 3 - 1 - 1 - 0.5 = 0.5 -> 1
        assert_eq!(result.rating(RiskCategory::MarketActivity), 1);
    }

    #[test]
    fn test_injected_postcode_table() {
        let mut premium_postcodes = PremiumPostcodes::empty();
        premium_postcodes.set_state("NT", ["0820"]);
        let scorer = RiskScorer::new(ScorerSettings {
            premium_postcodes,
            ..Default::default()
        });

        let property = PropertyAttributes {
            state: Some("NT".to_string()),
            postcode: Some("0820".to_string()),
            ..Default::default()
        };
        assert_eq!(scorer.evaluate(&property).rating(RiskCategory::Location), 2);
        assert_eq!(evaluate(&property).rating(RiskCategory::Location), 3);
    }

    #[test]
    fn test_custom_key_risk_settings() {
        let scorer = RiskScorer::new(ScorerSettings {
            key_risk_min_rating: 5,
            max_key_risk_factors: 10,
            ..Default::default()
        });
        assert_eq!(scorer.settings().key_risk_min_rating, 5);
        assert_eq!(scorer.settings().max_key_risk_factors, 10);

        let result = scorer.evaluate(&worst_case());
        let fives = result.categories.iter().filter(|c| c.rating == 5).count();
        assert_eq!(result.key_risk_factors.len(), fives);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let property = worst_case();
        let first = evaluate(&property);
        for _ in 0..10 {
            assert_eq!(evaluate(&property), first);
        }
    }
}
