//! Observation source integrations

pub mod fixed;
pub mod http_feed;
pub mod provider;

pub use fixed::FixedSource;
pub use http_feed::HttpFeedSource;
pub use provider::{collect_observations, ObservationSource, SourceError};
