//! Assessment orchestration
//!
//! Runs one fusion cycle end to end: collect observations, fuse them, score
//! every monitored location, contextualize against the historical catalog and
//! derive operational recommendations. The pipeline after collection is pure;
//! the same reading always produces the same assessment.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use shared::models::{
    FusedReading, HistoricalAdvisory, HistoricalEvent, Location, Recommendation, ScoredLocation,
};
use shared::types::RiskBand;
use shared::validation::validate_locations;
use shared::{fuse, match_and_advise, recommend, score};

use crate::error::{AppError, AppResult};
use crate::external::{collect_observations, ObservationSource};

/// Count of locations per risk band for one assessment
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RiskSummary {
    pub high: usize,
    pub elevated: usize,
    pub normal: usize,
}

impl RiskSummary {
    fn from_locations(locations: &[ScoredLocation]) -> Self {
        let mut summary = RiskSummary {
            high: 0,
            elevated: 0,
            normal: 0,
        };
        for scored in locations {
            match scored.risk.band() {
                RiskBand::High => summary.high += 1,
                RiskBand::Elevated => summary.elevated += 1,
                RiskBand::Normal => summary.normal += 1,
            }
        }
        summary
    }
}

/// Full output of one fusion cycle
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub reading: FusedReading,
    pub locations: Vec<ScoredLocation>,
    pub summary: RiskSummary,
    pub advisory: HistoricalAdvisory,
    pub recommendations: Vec<Recommendation>,
}

/// Assessment service over the configured sources and reference data
pub struct AssessmentService {
    sources: Vec<Arc<dyn ObservationSource>>,
    locations: Vec<Location>,
    catalog: Vec<HistoricalEvent>,
    fetch_timeout: Duration,
}

impl AssessmentService {
    pub fn new(
        sources: Vec<Arc<dyn ObservationSource>>,
        locations: Vec<Location>,
        catalog: Vec<HistoricalEvent>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            sources,
            locations,
            catalog,
            fetch_timeout,
        }
    }

    /// Load and validate the monitored location table from a JSON file
    pub fn load_locations(path: impl AsRef<Path>) -> AppResult<Vec<Location>> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::ReferenceData(format!("cannot read {}: {}", path.display(), e))
        })?;
        let locations: Vec<Location> = serde_json::from_str(&raw).map_err(|e| {
            AppError::ReferenceData(format!("cannot parse {}: {}", path.display(), e))
        })?;
        validate_locations(&locations)
            .map_err(|e| AppError::ReferenceData(e.to_string()))?;
        Ok(locations)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn catalog(&self) -> &[HistoricalEvent] {
        &self.catalog
    }

    /// Run one live fusion cycle against the configured sources
    pub async fn run_cycle(&self) -> Assessment {
        let observations = collect_observations(&self.sources, self.fetch_timeout).await;
        let reading = fuse(&observations);
        tracing::info!(
            confidence = reading.confidence,
            sources = reading.contributing_sources.len(),
            "fusion cycle complete"
        );
        self.assess_reading(reading)
    }

    /// Assess an already-fused reading (live or injected scenario)
    pub fn assess_reading(&self, reading: FusedReading) -> Assessment {
        let locations: Vec<ScoredLocation> = self
            .locations
            .iter()
            .map(|location| ScoredLocation {
                location: location.clone(),
                risk: score(&reading, location),
            })
            .collect();

        let summary = RiskSummary::from_locations(&locations);
        // Site-wide risk is the worst location's score
        let site_risk = locations.iter().map(|l| l.risk.score).max().unwrap_or(0);
        let advisory = match_and_advise(&reading, site_risk, &self.catalog);
        let recommendations = recommend(&reading, &locations);

        Assessment {
            reading,
            locations,
            summary,
            advisory,
            recommendations,
        }
    }
}
