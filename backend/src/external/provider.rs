//! Observation source abstraction and fan-out collection
//!
//! Every provider integration implements [`ObservationSource`]. A failing or
//! slow source degrades to an `Unavailable` observation; the fusion cycle
//! itself never fails because a feed does.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use shared::models::{SourceId, WeatherObservation};
use shared::validation::normalize_observation;
use thiserror::Error;
use tokio::task::JoinSet;

/// Errors a provider integration can surface
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("source timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("source not configured")]
    NotConfigured,
}

/// One configured weather feed
#[async_trait]
pub trait ObservationSource: Send + Sync {
    /// Which canonical source this feed reports as
    fn id(&self) -> SourceId;

    /// Fetch one observation; the caller enforces the time budget
    async fn fetch(&self) -> Result<WeatherObservation, SourceError>;
}

/// Fetch all sources concurrently within a per-source time budget.
///
/// Results come back in the order the sources were configured. A source that
/// errors or exceeds the budget yields an `Unavailable` observation for its
/// id; successful payloads are normalized before they are returned.
pub async fn collect_observations(
    sources: &[Arc<dyn ObservationSource>],
    timeout: Duration,
) -> Vec<WeatherObservation> {
    let mut set = JoinSet::new();
    for (index, source) in sources.iter().enumerate() {
        let source = Arc::clone(source);
        set.spawn(async move {
            let id = source.id();
            let observation = match tokio::time::timeout(timeout, source.fetch()).await {
                Ok(Ok(obs)) => normalize_observation(obs),
                Ok(Err(e)) => {
                    tracing::warn!("source {} failed: {}", id, e);
                    WeatherObservation::unavailable(id)
                }
                Err(_) => {
                    tracing::warn!("source {} exceeded {}s budget", id, timeout.as_secs());
                    WeatherObservation::unavailable(id)
                }
            };
            (index, observation)
        });
    }

    let mut indexed = Vec::with_capacity(sources.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(pair) => indexed.push(pair),
            Err(e) => tracing::error!("source task panicked: {}", e),
        }
    }
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, obs)| obs).collect()
}
