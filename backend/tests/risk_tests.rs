//! Risk scorer integration tests

use chrono::Utc;
use proptest::prelude::*;

use shared::fusion::fuse_at;
use shared::models::{FusedReading, Location};
use shared::score;
use shared::types::RiskBand;

fn reading() -> FusedReading {
    fuse_at(&[], Utc::now())
}

fn platform(sheltered: bool, exposure: f64) -> Location {
    Location {
        id: "P4".to_string(),
        name: "Platform 4".to_string(),
        is_sheltered: sheltered,
        exposure_factor: exposure,
    }
}

#[test]
fn test_storm_scenario_score() {
    let mut r = reading();
    r.precipitation_rate = 22.3;
    r.wind_speed = 24.7;
    r.humidity = 92.0;
    r.pressure = 998.0;

    // 30 + 25 + 13.5 + 5 + 0 + 3 = 76.5 -> 77
    let risk = score(&r, &platform(false, 0.9));
    assert_eq!(risk.score, 77);
    assert_eq!(risk.band(), RiskBand::High);
}

#[test]
fn test_precipitation_boundary() {
    let mut r = reading();
    let location = platform(false, 0.0);

    r.precipitation_rate = 5.0;
    assert_eq!(score(&r, &location).score, 15);

    r.precipitation_rate = 5.01;
    assert_eq!(score(&r, &location).score, 30);
}

#[test]
fn test_wind_band_boundaries() {
    let mut r = reading();
    let location = platform(false, 0.0);

    r.wind_speed = 8.0;
    assert_eq!(score(&r, &location).score, 0);

    r.wind_speed = 8.1;
    assert_eq!(score(&r, &location).score, 15); // 60 * 0.25

    r.wind_speed = 14.1;
    assert_eq!(score(&r, &location).score, 25);
}

#[test]
fn test_temperature_extremes_both_directions() {
    let mut r = reading();
    let location = platform(true, 0.5);

    r.temperature = -0.1;
    assert_eq!(score(&r, &location).score, 7); // 70 * 0.10

    r.temperature = 35.1;
    assert_eq!(score(&r, &location).score, 7);

    r.temperature = 35.0;
    assert_eq!(score(&r, &location).score, 0);
}

#[test]
fn test_sheltered_exposure_is_ignored() {
    let risk = score(&reading(), &platform(true, 1.0));
    assert_eq!(risk.score, 0);
}

proptest! {
    /// Score always lands in [0, 100] and is stable across calls
    #[test]
    fn prop_score_bounded_and_deterministic(
        precipitation in 0.0f64..=500.0,
        wind in 0.0f64..=150.0,
        temperature in -90.0f64..=60.0,
        humidity in 0.0f64..=100.0,
        pressure in 850.0f64..=1100.0,
        exposure in 0.0f64..=1.0,
        sheltered in any::<bool>(),
    ) {
        let mut r = reading();
        r.precipitation_rate = precipitation;
        r.wind_speed = wind;
        r.temperature = temperature;
        r.humidity = humidity;
        r.pressure = pressure;
        let location = platform(sheltered, exposure);

        let first = score(&r, &location);
        let second = score(&r, &location);
        prop_assert!(first.score <= 100);
        prop_assert_eq!(first.score, second.score);
    }

    /// A sheltered location never scores above the weather-only ceiling
    #[test]
    fn prop_sheltered_never_pays_exposure(exposure in 0.0f64..=1.0) {
        let mut r = reading();
        r.precipitation_rate = 30.0;
        r.wind_speed = 30.0;
        r.humidity = 95.0;
        r.temperature = -5.0;
        r.pressure = 980.0;

        let sheltered = score(&r, &platform(true, exposure));
        let exposed = score(&r, &platform(false, exposure));
        prop_assert!(sheltered.score <= exposed.score);
        // 30 + 25 + 0 + 5 + 7 + 3
        prop_assert_eq!(sheltered.score, 70);
    }
}
