//! Operational recommendation generator
//!
//! Independent threshold rules over the fused reading; every matching rule
//! fires, in declaration order. Location scores only filter which locations
//! a rule cites, never whether it fires.

use crate::models::{FusedReading, Recommendation, ScoredLocation, Severity};

pub const PASSENGERS_PER_HIGH_RISK_LOCATION: u32 = 150;
pub const PASSENGERS_PER_MEDIUM_RISK_LOCATION: u32 = 100;

fn unsheltered_names(locations: &[ScoredLocation], min: u8, max: u8) -> Vec<String> {
    locations
        .iter()
        .filter(|l| !l.location.is_sheltered && l.risk.score >= min && l.risk.score <= max)
        .map(|l| l.location.name.clone())
        .collect()
}

/// Derive operational actions from a fused reading and the scored locations.
///
/// An empty result means "normal conditions", not "no data".
pub fn recommend(reading: &FusedReading, locations: &[ScoredLocation]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if reading.precipitation_rate > 10.0 {
        let cited = unsheltered_names(locations, 70, u8::MAX);
        let affected = cited.len() as u32 * PASSENGERS_PER_HIGH_RISK_LOCATION;
        recommendations.push(Recommendation {
            severity: Severity::Critical,
            title: "Torrential Rain - Flooding Risk".to_string(),
            description: format!(
                "Extreme precipitation of {:.1} mm/h",
                reading.precipitation_rate
            ),
            action: "Suspend service on uncovered platforms and evacuate if necessary"
                .to_string(),
            locations: cited,
            affected_passengers: Some(affected),
        });
    }

    if reading.wind_speed > 20.0 {
        let cited = unsheltered_names(locations, 0, u8::MAX);
        let affected = cited.len() as u32 * PASSENGERS_PER_HIGH_RISK_LOCATION;
        recommendations.push(Recommendation {
            severity: Severity::Critical,
            title: "Extreme Winds - Passenger Hazard".to_string(),
            description: format!(
                "Wind of {:.1} m/s exceeds safety limits",
                reading.wind_speed
            ),
            action: "Suspend operations on exposed platforms immediately".to_string(),
            locations: cited,
            affected_passengers: Some(affected),
        });
    }

    if reading.precipitation_rate > 2.0 && reading.precipitation_rate <= 10.0 {
        let cited = unsheltered_names(locations, 50, 69);
        let affected = cited.len() as u32 * PASSENGERS_PER_MEDIUM_RISK_LOCATION;
        recommendations.push(Recommendation {
            severity: Severity::Medium,
            title: "Heavy Rain - Surveillance Needed".to_string(),
            description: format!(
                "Rain of {:.1} mm/h may affect uncovered platforms",
                reading.precipitation_rate
            ),
            action: "Reinforce cleaning staff and place caution signage".to_string(),
            locations: cited,
            affected_passengers: Some(affected),
        });
    }

    if reading.wind_speed > 12.0 && reading.wind_speed <= 20.0 {
        recommendations.push(Recommendation {
            severity: Severity::Medium,
            title: "Strong Wind - Caution".to_string(),
            description: format!("Wind of {:.1} m/s requires supervision", reading.wind_speed),
            action: "Increase surveillance on exposed platforms and alert passengers"
                .to_string(),
            locations: unsheltered_names(locations, 50, 69),
            affected_passengers: None,
        });
    }

    if reading.temperature < -2.0 {
        recommendations.push(Recommendation {
            severity: Severity::Medium,
            title: "Sub-Zero Temperatures - Ice Risk".to_string(),
            description: format!(
                "{:.1}°C can produce slippery surfaces",
                reading.temperature
            ),
            action: "Activate anti-ice protocol and increase safety signage".to_string(),
            locations: Vec::new(),
            affected_passengers: None,
        });
    }

    if reading.temperature > 38.0 {
        recommendations.push(Recommendation {
            severity: Severity::Medium,
            title: "Extreme Temperature - Passenger Risk".to_string(),
            description: format!(
                "{:.1}°C can cause discomfort on exposed platforms",
                reading.temperature
            ),
            action: "Open additional shaded areas and increase water availability".to_string(),
            locations: Vec::new(),
            affected_passengers: None,
        });
    }

    if reading.pressure < 995.0 && reading.pressure >= 990.0 {
        recommendations.push(Recommendation {
            severity: Severity::Preventive,
            title: "Low Pressure - Possible Weather Change".to_string(),
            description: format!(
                "Pressure of {:.0} hPa suggests changing conditions",
                reading.pressure
            ),
            action: "Review the extended forecast and stage equipment if worsening is expected"
                .to_string(),
            locations: Vec::new(),
            affected_passengers: None,
        });
    }

    if reading.humidity > 90.0 && reading.temperature > 20.0 {
        recommendations.push(Recommendation {
            severity: Severity::Preventive,
            title: "High Humidity - Possible Reduced Visibility".to_string(),
            description: format!(
                "Humidity of {:.0}% can cause condensation",
                reading.humidity
            ),
            action: "Check ventilation systems and improve lighting if necessary".to_string(),
            locations: Vec::new(),
            affected_passengers: None,
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fusion::fuse_at;
    use crate::models::{Location, RiskScore};
    use chrono::Utc;

    fn reading() -> FusedReading {
        fuse_at(&[], Utc::now())
    }

    fn scored(id: &str, sheltered: bool, score: u8) -> ScoredLocation {
        ScoredLocation {
            location: Location {
                id: id.to_string(),
                name: format!("Platform {}", &id[1..]),
                is_sheltered: sheltered,
                exposure_factor: 0.8,
            },
            risk: RiskScore {
                location_id: id.to_string(),
                score,
            },
        }
    }

    #[test]
    fn test_torrential_rain_fires_single_critical() {
        let mut r = reading();
        r.precipitation_rate = 12.0;
        r.wind_speed = 5.0;
        r.temperature = 20.0;
        r.humidity = 50.0;
        r.pressure = 1013.0;
        let locations = vec![scored("P3", false, 75), scored("P5", true, 80)];

        let recs = recommend(&r, &locations);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::Critical);
        assert_eq!(recs[0].locations, vec!["Platform 3".to_string()]);
        assert_eq!(recs[0].affected_passengers, Some(150));
    }

    #[test]
    fn test_rules_fire_independently_in_order() {
        let mut r = reading();
        r.precipitation_rate = 22.3;
        r.wind_speed = 24.7;
        r.temperature = 18.4;
        r.humidity = 92.0;
        r.pressure = 998.0;
        let locations = vec![scored("P3", false, 85), scored("P4", false, 60)];

        let recs = recommend(&r, &locations);
        // Torrential rain, then extreme wind; humidity rule needs temp > 20
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "Torrential Rain - Flooding Risk");
        assert_eq!(recs[1].title, "Extreme Winds - Passenger Hazard");
        assert_eq!(recs[1].affected_passengers, Some(300));
    }

    #[test]
    fn test_calm_reading_produces_no_recommendations() {
        let locations = vec![scored("P1", true, 0)];
        assert!(recommend(&reading(), &locations).is_empty());
    }

    #[test]
    fn test_medium_band_boundaries() {
        let mut r = reading();
        r.precipitation_rate = 10.0;
        r.wind_speed = 20.0;
        let locations = vec![scored("P4", false, 55)];

        let recs = recommend(&r, &locations);
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|rec| rec.severity == Severity::Medium));
        assert_eq!(recs[0].affected_passengers, Some(100));
        assert_eq!(recs[1].affected_passengers, None);
    }

    #[test]
    fn test_preventive_pressure_window() {
        let mut r = reading();
        r.pressure = 992.0;
        let recs = recommend(&r, &[]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::Preventive);

        r.pressure = 989.9;
        assert!(recommend(&r, &[]).is_empty());
    }
}
