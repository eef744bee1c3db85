//! Domain models for the Station Weather Resilience Platform

mod fused;
mod history;
mod location;
mod observation;
mod recommendation;
mod risk;

pub use fused::*;
pub use history::*;
pub use location::*;
pub use observation::*;
pub use recommendation::*;
pub use risk::*;
