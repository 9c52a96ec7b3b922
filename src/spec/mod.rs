//! Project specification model
//!
//! The structured description of the project a prompt is generated for,
//! including the ordered feature selection.

mod features;
mod model;

pub use features::FeatureSet;
pub use model::*;
