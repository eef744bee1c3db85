//! Shared types and core pipeline for the Station Weather Resilience Platform
//!
//! This crate contains the domain models and the pure reconciliation-and-
//! scoring core shared between the backend and other components: multi-source
//! fusion, per-location risk scoring, historical pattern matching, and
//! operational recommendations. Everything here is deterministic and free of
//! I/O; fetching observations and serving results belong to the backend.

pub mod fusion;
pub mod history;
pub mod models;
pub mod recommendation;
pub mod risk;
pub mod types;
pub mod validation;

pub use fusion::{fuse, NeutralDefaults, NEUTRAL_DEFAULTS};
pub use history::{builtin_catalog, find_similar_event, match_and_advise};
pub use models::*;
pub use recommendation::recommend;
pub use risk::score;
pub use types::*;
