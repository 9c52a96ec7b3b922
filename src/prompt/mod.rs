//! Prompt synthesis
//!
//! Turns a [`ProjectSpecification`](crate::spec::ProjectSpecification) and
//! its resolved catalog labels into the prompt text handed to an AI
//! generation service.

mod synthesizer;

pub use synthesizer::*;

use crate::catalog::Catalog;
use crate::spec::ProjectSpecification;

/// Resolves labels against `catalog` and synthesizes in one step.
pub fn synthesize_with_catalog(spec: &ProjectSpecification, catalog: &Catalog) -> String {
    synthesize(spec, &catalog.resolve(spec))
}
