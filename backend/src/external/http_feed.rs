//! Generic HTTP observation feed
//!
//! Pulls a canonical JSON observation from a configured endpoint. Feed
//! adapters that speak provider-specific formats sit in front of this shape;
//! the server itself only understands the canonical payload.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::models::{ObservationStatus, SourceId, WeatherObservation};

use super::provider::{ObservationSource, SourceError};

/// Canonical observation payload expected from a feed endpoint.
///
/// Every field is optional; sentinel and out-of-range values are cleared
/// downstream by normalization.
#[derive(Debug, Deserialize)]
pub struct FeedPayload {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub precipitation_rate: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub pressure: Option<f64>,
}

/// HTTP feed client for one configured source
#[derive(Clone)]
pub struct HttpFeedSource {
    client: Client,
    source: SourceId,
    endpoint: String,
}

impl HttpFeedSource {
    pub fn new(source: SourceId, endpoint: String) -> Self {
        Self {
            client: Client::new(),
            source,
            endpoint,
        }
    }
}

#[async_trait]
impl ObservationSource for HttpFeedSource {
    fn id(&self) -> SourceId {
        self.source
    }

    async fn fetch(&self) -> Result<WeatherObservation, SourceError> {
        if self.endpoint.is_empty() {
            return Err(SourceError::NotConfigured);
        }

        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Malformed(format!(
                "feed returned HTTP {}",
                response.status()
            )));
        }

        let payload: FeedPayload = response
            .json()
            .await
            .map_err(|e| SourceError::Malformed(e.to_string()))?;

        Ok(WeatherObservation {
            source: self.source,
            status: ObservationStatus::Success,
            temperature: payload.temperature,
            humidity: payload.humidity,
            precipitation_rate: payload.precipitation_rate,
            wind_speed: payload.wind_speed,
            wind_direction: payload.wind_direction,
            pressure: payload.pressure,
        })
    }
}
