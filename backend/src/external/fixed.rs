//! Fixed observation source
//!
//! Returns a stored observation on every fetch. Used for scenario injection
//! and in tests that need a deterministic feed.

use async_trait::async_trait;
use shared::models::{SourceId, WeatherObservation};

use super::provider::{ObservationSource, SourceError};

/// A source that always reports the same observation
pub struct FixedSource {
    observation: WeatherObservation,
}

impl FixedSource {
    pub fn new(observation: WeatherObservation) -> Self {
        Self { observation }
    }
}

#[async_trait]
impl ObservationSource for FixedSource {
    fn id(&self) -> SourceId {
        self.observation.source
    }

    async fn fetch(&self) -> Result<WeatherObservation, SourceError> {
        Ok(self.observation.clone())
    }
}
