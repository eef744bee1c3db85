//! Historical context matcher
//!
//! Compares a fused reading against the static catalog of documented extreme
//! events and produces a qualitative advisory. The catalog is small and
//! fixed, so matching is plain boolean counting plus a max-by-date reduction.

use chrono::NaiveDate;

use crate::models::{AdvisoryLevel, FusedReading, HistoricalAdvisory, HistoricalEvent};

/// Tolerances for the similarity check; an event is similar when at least
/// two of the three conditions hold
pub const PRECIPITATION_TOLERANCE_MM_H: f64 = 15.0;
pub const WIND_TOLERANCE_MPS: f64 = 20.0;
pub const TEMPERATURE_BAND_C: f64 = 8.0;

const CONFIDENCE_WITH_MATCH: u8 = 85;
const CONFIDENCE_NO_MATCH: u8 = 50;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The built-in catalog of documented extreme events for the monitored area
pub fn builtin_catalog() -> Vec<HistoricalEvent> {
    vec![
        HistoricalEvent {
            name: "Borrasca Filomena".to_string(),
            date: date(2021, 1, 9),
            region: "Madrid - Chamartín".to_string(),
            peak_precipitation: 45.2,
            peak_wind_speed: 38.5,
            min_temperature: -6.8,
            max_temperature: 2.1,
            min_pressure: 985.3,
            narrative: "Historic snowfall that paralysed the Madrid area for days".to_string(),
            impact_summary: "400,000 passengers affected, 72h total service interruption"
                .to_string(),
        },
        HistoricalEvent {
            name: "DANA Valencia-Madrid".to_string(),
            date: date(2024, 10, 29),
            region: "Mediterranean-Madrid corridor".to_string(),
            peak_precipitation: 78.4,
            peak_wind_speed: 42.1,
            min_temperature: 12.3,
            max_temperature: 18.7,
            min_pressure: 992.1,
            narrative: "Severe cut-off low with torrential rainfall".to_string(),
            impact_summary: "250,000 passengers rerouted, 48h of limited service".to_string(),
        },
        HistoricalEvent {
            name: "Extreme Heat Wave".to_string(),
            date: date(2023, 7, 14),
            region: "Madrid metropolitan area".to_string(),
            peak_precipitation: 0.0,
            peak_wind_speed: 15.2,
            min_temperature: 28.9,
            max_temperature: 44.3,
            min_pressure: 1018.7,
            narrative: "Record temperatures affecting rail infrastructure".to_string(),
            impact_summary: "Speed restrictions on 15% of routes, thermal expansion of track"
                .to_string(),
        },
        HistoricalEvent {
            name: "Madrid Hailstorm".to_string(),
            date: date(2022, 8, 30),
            region: "Madrid centre-north".to_string(),
            peak_precipitation: 32.1,
            peak_wind_speed: 68.4,
            min_temperature: 19.2,
            max_temperature: 31.8,
            min_pressure: 996.4,
            narrative: "Severe storm with hail up to 4 cm in diameter".to_string(),
            impact_summary: "6h partial suspension, damage to outdoor signalling".to_string(),
        },
        HistoricalEvent {
            name: "Borrasca Celia".to_string(),
            date: date(2023, 12, 18),
            region: "Madrid - Atlantic corridor".to_string(),
            peak_precipitation: 28.7,
            peak_wind_speed: 52.3,
            min_temperature: 4.1,
            max_temperature: 12.5,
            min_pressure: 988.9,
            narrative: "Hurricane-force winds and intense rain".to_string(),
            impact_summary: "120,000 passengers affected, 24h service interruption".to_string(),
        },
    ]
}

fn is_similar(event: &HistoricalEvent, reading: &FusedReading) -> bool {
    let precipitation_match = (event.peak_precipitation - reading.precipitation_rate).abs()
        < PRECIPITATION_TOLERANCE_MM_H;
    let wind_match = (event.peak_wind_speed - reading.wind_speed).abs() < WIND_TOLERANCE_MPS;
    let temperature_match = reading.temperature >= event.min_temperature - TEMPERATURE_BAND_C
        && reading.temperature <= event.max_temperature + TEMPERATURE_BAND_C;

    [precipitation_match, wind_match, temperature_match]
        .into_iter()
        .filter(|m| *m)
        .count()
        >= 2
}

/// Find the most recent catalog event similar to the current reading
pub fn find_similar_event<'a>(
    reading: &FusedReading,
    catalog: &'a [HistoricalEvent],
) -> Option<&'a HistoricalEvent> {
    catalog
        .iter()
        .filter(|event| is_similar(event, reading))
        .max_by_key(|event| event.date)
}

fn matched_recommendations(level: AdvisoryLevel, event: &HistoricalEvent) -> Vec<String> {
    match level {
        AdvisoryLevel::Warning => vec![
            format!("Lessons from {}: {}", event.name, event.impact_summary),
            "Consider activating preventive protocols".to_string(),
            "Intensive monitoring recommended".to_string(),
            "Prepare passenger communications".to_string(),
        ],
        AdvisoryLevel::Advisory => vec![
            format!("Historical pattern detected: {}", event.name),
            "Maintain reinforced surveillance".to_string(),
            "Review contingency protocols".to_string(),
            "Staff on preventive alert".to_string(),
        ],
        AdvisoryLevel::Watch => vec![
            format!("Conditions resemble {}", event.name),
            "Standard monitoring is appropriate".to_string(),
            "No immediate action required".to_string(),
        ],
        AdvisoryLevel::Info => vec![
            "Conditions within normal parameters".to_string(),
            "Routine follow-up is sufficient".to_string(),
        ],
    }
}

fn generic_recommendations(level: AdvisoryLevel) -> Vec<String> {
    match level {
        AdvisoryLevel::Info => vec![
            "Normal conditions".to_string(),
            "Standard procedures apply".to_string(),
        ],
        _ => vec![
            "Atypical conditions without clear precedent".to_string(),
            "Maintain standard surveillance".to_string(),
            "Consider consulting the forecast desk".to_string(),
        ],
    }
}

/// Contextualize a reading against the catalog.
///
/// The advisory level comes from the live risk score alone; a matched event
/// only contributes narrative and raises confidence to 85. With no match the
/// advisory stays generic at confidence 50.
pub fn match_and_advise(
    reading: &FusedReading,
    risk_score: u8,
    catalog: &[HistoricalEvent],
) -> HistoricalAdvisory {
    let level = AdvisoryLevel::from_risk_score(risk_score);

    match find_similar_event(reading, catalog) {
        Some(event) => HistoricalAdvisory {
            level,
            confidence: CONFIDENCE_WITH_MATCH,
            context: format!(
                "Conditions similar to {} ({}): {}",
                event.name, event.date, event.narrative
            ),
            recommendations: matched_recommendations(level, event),
            matched_event: Some(event.clone()),
        },
        None => HistoricalAdvisory {
            level,
            confidence: CONFIDENCE_NO_MATCH,
            context: "No similar historical precedent identified".to_string(),
            recommendations: generic_recommendations(level),
            matched_event: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fusion::fuse_at;
    use chrono::Utc;

    fn reading(precipitation: f64, wind: f64, temperature: f64) -> FusedReading {
        let mut r = fuse_at(&[], Utc::now());
        r.precipitation_rate = precipitation;
        r.wind_speed = wind;
        r.temperature = temperature;
        r
    }

    #[test]
    fn test_most_recent_similar_event_wins() {
        let catalog = builtin_catalog();
        // Storm-like conditions: wind matches several events, temperature
        // band selects the autumn and winter storms; recency picks the DANA.
        let current = reading(22.0, 25.0, 18.0);
        let event = find_similar_event(&current, &catalog).expect("should match");
        assert_eq!(event.name, "DANA Valencia-Madrid");
    }

    #[test]
    fn test_calm_reading_has_no_precedent() {
        let catalog = builtin_catalog();
        let advisory = match_and_advise(&reading(0.0, 2.0, 60.0), 5, &catalog);
        assert!(advisory.matched_event.is_none());
        assert_eq!(advisory.confidence, 50);
        assert_eq!(advisory.level, AdvisoryLevel::Info);
    }

    #[test]
    fn test_level_follows_risk_score_not_event() {
        let catalog = builtin_catalog();
        let current = reading(22.0, 25.0, 18.0);
        let advisory = match_and_advise(&current, 12, &catalog);
        // Extreme precedent matched, but the live risk is low
        assert!(advisory.matched_event.is_some());
        assert_eq!(advisory.level, AdvisoryLevel::Info);
        assert_eq!(advisory.confidence, 85);
    }
}
