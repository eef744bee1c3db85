//! Recommendation generator integration tests

use chrono::Utc;
use proptest::prelude::*;

use shared::fusion::fuse_at;
use shared::models::{FusedReading, Location, RiskScore, ScoredLocation, Severity};
use shared::recommend;

fn reading() -> FusedReading {
    fuse_at(&[], Utc::now())
}

fn scored(id: &str, name: &str, sheltered: bool, score: u8) -> ScoredLocation {
    ScoredLocation {
        location: Location {
            id: id.to_string(),
            name: name.to_string(),
            is_sheltered: sheltered,
            exposure_factor: 0.7,
        },
        risk: RiskScore {
            location_id: id.to_string(),
            score,
        },
    }
}

fn platforms() -> Vec<ScoredLocation> {
    vec![
        scored("P3", "Platform 3", false, 78),
        scored("P4", "Platform 4", false, 55),
        scored("P5", "Platform 5", true, 80),
    ]
}

#[test]
fn test_heavy_rain_alone_yields_single_critical() {
    let mut r = reading();
    r.precipitation_rate = 12.0;
    r.wind_speed = 5.0;
    r.temperature = 20.0;
    r.humidity = 50.0;
    r.pressure = 1013.0;

    let recs = recommend(&r, &platforms());
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].severity, Severity::Critical);
    // Only the unsheltered high-risk platform is cited
    assert_eq!(recs[0].locations, vec!["Platform 3".to_string()]);
    assert_eq!(recs[0].affected_passengers, Some(150));
}

#[test]
fn test_extreme_wind_cites_all_unsheltered() {
    let mut r = reading();
    r.wind_speed = 24.7;

    let recs = recommend(&r, &platforms());
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].severity, Severity::Critical);
    assert_eq!(
        recs[0].locations,
        vec!["Platform 3".to_string(), "Platform 4".to_string()]
    );
    assert_eq!(recs[0].affected_passengers, Some(300));
}

#[test]
fn test_medium_rules_cite_medium_risk_band_only() {
    let mut r = reading();
    r.precipitation_rate = 6.0;
    r.wind_speed = 15.0;

    let recs = recommend(&r, &platforms());
    assert_eq!(recs.len(), 2);
    for rec in &recs {
        assert_eq!(rec.severity, Severity::Medium);
        assert_eq!(rec.locations, vec!["Platform 4".to_string()]);
    }
    assert_eq!(recs[0].affected_passengers, Some(100));
    assert_eq!(recs[1].affected_passengers, None);
}

#[test]
fn test_generic_rules_carry_no_locations() {
    let mut r = reading();
    r.temperature = -3.0;
    r.pressure = 992.0;

    let recs = recommend(&r, &platforms());
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].severity, Severity::Medium); // ice
    assert_eq!(recs[1].severity, Severity::Preventive); // pressure
    assert!(recs.iter().all(|rec| rec.locations.is_empty()));
}

#[test]
fn test_humidity_rule_needs_warm_air() {
    let mut r = reading();
    r.humidity = 95.0;
    r.temperature = 18.0;
    assert!(recommend(&r, &platforms()).is_empty());

    r.temperature = 25.0;
    let recs = recommend(&r, &platforms());
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].severity, Severity::Preventive);
}

#[test]
fn test_calm_conditions_mean_empty_set() {
    assert!(recommend(&reading(), &platforms()).is_empty());
}

proptest! {
    /// Output order always follows rule declaration order: criticals first,
    /// then medium, then preventive
    #[test]
    fn prop_severity_order_is_monotonic(
        precipitation in 0.0f64..=40.0,
        wind in 0.0f64..=40.0,
        temperature in -10.0f64..=45.0,
        humidity in 0.0f64..=100.0,
        pressure in 980.0f64..=1030.0,
    ) {
        let mut r = reading();
        r.precipitation_rate = precipitation;
        r.wind_speed = wind;
        r.temperature = temperature;
        r.humidity = humidity;
        r.pressure = pressure;

        let recs = recommend(&r, &platforms());
        let ranks: Vec<u8> = recs
            .iter()
            .map(|rec| match rec.severity {
                Severity::Critical => 0,
                Severity::Medium => 1,
                Severity::Preventive => 2,
            })
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ranks, sorted);
    }

    /// The generator never fails and is idempotent for any plausible reading
    #[test]
    fn prop_recommend_is_idempotent(
        precipitation in 0.0f64..=500.0,
        wind in 0.0f64..=150.0,
    ) {
        let mut r = reading();
        r.precipitation_rate = precipitation;
        r.wind_speed = wind;

        let first = recommend(&r, &platforms());
        let second = recommend(&r, &platforms());
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
