//! Scoring invariant tests
//!
//! Sweep a grid of attribute combinations and check the properties every
//! assessment must satisfy regardless of input.

use proprisk_core::{
    evaluate, MarketConditions, PriceMovement, PropertyAttributes, RiskCategory, SalesActivity,
};

fn grid() -> Vec<PropertyAttributes> {
    let distances = [None, Some(50.0), Some(150.0), Some(700.0), Some(1200.0), Some(2500.0)];
    let flags = [None, Some(false), Some(true)];
    let prices = [
        None,
        Some(PriceMovement::Increasing),
        Some(PriceMovement::Stable),
        Some(PriceMovement::Declining),
        Some(PriceMovement::Unknown),
    ];
    let sales = [
        None,
        Some(SalesActivity::High),
        Some(SalesActivity::Moderate),
        Some(SalesActivity::Low),
    ];
    let zonings = [None, Some("R1"), Some("R3"), Some("B2"), Some("SP2")];
    let kinds = [None, Some("House"), Some("Apartment")];
    let states = [None, Some("NSW"), Some("WA"), Some("NT")];

    let mut out = Vec::new();
    for (i, &distance) in distances.iter().enumerate() {
        for &flag in &flags {
            for (j, &price) in prices.iter().enumerate() {
                for &sale in &sales {
                    let zoning = zonings[(i + j) % zonings.len()];
                    let kind = kinds[(i + j) % kinds.len()];
                    let state = states[j % states.len()];
                    out.push(PropertyAttributes {
                        state: state.map(str::to_string),
                        postcode: Some("2088".to_string()),
                        property_type: kind.map(str::to_string),
                        zoning: zoning.map(str::to_string),
                        land_area: distance,
                        building_area: distance.map(|d| d / 10.0),
                        bedrooms: Some((i % 5) as u32),
                        bathrooms: Some((j % 3) as u32),
                        car_spaces: Some((i % 3) as u32),
                        year_built: Some(1940 + 20 * i as i32),
                        proximity_to_main_road: distance,
                        proximity_to_transport: distance,
                        proximity_to_shops: distance,
                        proximity_to_schools: distance,
                        flood_zone: flag,
                        bushfire_zone: flag,
                        coastal_zone: flag,
                        planning_restrictions: if flag == Some(true) {
                            vec!["Heritage".to_string(), "Flood".to_string()]
                        } else {
                            Vec::new()
                        },
                        market_conditions: Some(MarketConditions {
                            days_on_market: distance.map(|d| d / 20.0),
                            price_movement: price,
                            sales_activity: sale,
                            rental_vacancy: distance.map(|d| d / 300.0),
                        }),
                        ..Default::default()
                    });
                }
            }
        }
    }
    out
}

#[test]
fn test_ratings_always_in_range() {
    for property in grid() {
        let result = evaluate(&property);
        assert_eq!(result.categories.len(), 7);
        for c in &result.categories {
            assert!((1..=5).contains(&c.rating), "{:?} out of range", c);
        }
    }
}

#[test]
fn test_key_risks_are_capped_ordered_and_high() {
    for property in grid() {
        let result = evaluate(&property);
        let expected: Vec<String> = result
            .categories
            .iter()
            .filter(|c| c.rating >= 4)
            .take(3)
            .map(|c| c.summary.clone())
            .collect();
        assert!(result.key_risk_factors.len() <= 3);
        assert_eq!(result.key_risk_factors, expected);
    }
}

#[test]
fn test_categories_always_in_fixed_order() {
    for property in grid() {
        let order: Vec<RiskCategory> = evaluate(&property)
            .categories
            .iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(order, RiskCategory::ALL.to_vec());
    }
}

#[test]
fn test_close_transport_never_worsens_location() {
    for property in grid() {
        let mut without = property.clone();
        without.proximity_to_transport = None;
        let mut with = property;
        with.proximity_to_transport = Some(400.0);
        assert!(
            evaluate(&with).rating(RiskCategory::Location)
                <= evaluate(&without).rating(RiskCategory::Location)
        );
    }
}

#[test]
fn test_flood_zone_environmental_at_least_three() {
    for property in grid() {
        let mut flooded = property;
        flooded.flood_zone = Some(true);
        assert!(evaluate(&flooded).rating(RiskCategory::Environmental) >= 3);
    }
}

#[test]
fn test_repeated_evaluation_is_identical() {
    for property in grid().into_iter().step_by(17) {
        let first = evaluate(&property);
        for _ in 0..3 {
            assert_eq!(evaluate(&property), first);
        }
    }
}
