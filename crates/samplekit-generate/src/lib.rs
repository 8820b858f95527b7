//! Sampling engine for samplekit.
//!
//! Draws synthetic test data (vehicle models, names, colors, registration
//! numbers, timestamps, integers, caller-supplied lists) from reference
//! tables or numeric ranges.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod params;

pub use engine::SamplingEngine;
pub use errors::GenerationError;
pub use generators::registration::RegistrationFormat;
pub use generators::{GeneratedValue, GeneratorRegistry, checked_count};
pub use model::{CategoryPair, Person, RegistrationBatch};
pub use output::OutputFormat;
