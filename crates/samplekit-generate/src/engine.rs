use std::sync::Arc;

use chrono::NaiveDateTime;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use tracing::debug;

use samplekit_core::{Gender, ReferenceCatalog, ReferenceTables, VehicleKind};

use crate::errors::GenerationError;
use crate::generators::registration::{self, RegistrationFormat};
use crate::generators::{
    GeneratedValue, GeneratorContext, GeneratorRegistry, catalog, names, primitives, temporal,
};
use crate::model::{CategoryPair, Person, RegistrationBatch};

/// Owns a random source and the reference tables it samples from.
///
/// The source is injected, so tests can pass a seeded RNG and threads can
/// each build their own engine; the tables are shared read-only.
#[derive(Debug, Clone)]
pub struct SamplingEngine<R = ChaCha8Rng> {
    reference: Arc<ReferenceTables>,
    rng: R,
}

impl SamplingEngine<ChaCha8Rng> {
    /// Engine seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_os_rng())
    }

    /// Reproducible engine for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> SamplingEngine<R> {
    /// Engine over the bundled Swedish tables.
    pub fn new(rng: R) -> Self {
        Self::with_reference(rng, ReferenceTables::swedish())
    }

    pub fn with_reference(rng: R, reference: Arc<ReferenceTables>) -> Self {
        Self { reference, rng }
    }

    pub fn reference(&self) -> &ReferenceTables {
        &self.reference
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Uniform index in `[0, len)`; fails when `len == 0`.
    pub fn pick_index(&mut self, len: usize) -> Result<usize, GenerationError> {
        primitives::pick_index(&mut self.rng, len)
    }

    pub fn sample_category_pairs(
        &mut self,
        catalog: &ReferenceCatalog,
        count: usize,
    ) -> Result<Vec<CategoryPair>, GenerationError> {
        let pairs = catalog::sample_category_pairs(&mut self.rng, catalog, count)?;
        debug!(event = "category_pairs_sampled", count, categories = catalog.len());
        Ok(pairs)
    }

    pub fn vehicle_models(
        &mut self,
        kind: VehicleKind,
        count: usize,
    ) -> Result<Vec<CategoryPair>, GenerationError> {
        let reference = Arc::clone(&self.reference);
        self.sample_category_pairs(reference.vehicles(kind), count)
    }

    pub fn aeroplane_models(&mut self, count: usize) -> Result<Vec<CategoryPair>, GenerationError> {
        self.vehicle_models(VehicleKind::Aeroplane, count)
    }

    pub fn boat_models(&mut self, count: usize) -> Result<Vec<CategoryPair>, GenerationError> {
        self.vehicle_models(VehicleKind::Boat, count)
    }

    pub fn bus_models(&mut self, count: usize) -> Result<Vec<CategoryPair>, GenerationError> {
        self.vehicle_models(VehicleKind::Bus, count)
    }

    pub fn car_models(&mut self, count: usize) -> Result<Vec<CategoryPair>, GenerationError> {
        self.vehicle_models(VehicleKind::Car, count)
    }

    pub fn motorcycle_models(&mut self, count: usize) -> Result<Vec<CategoryPair>, GenerationError> {
        self.vehicle_models(VehicleKind::Motorcycle, count)
    }

    /// Resample `items` with replacement; `None` keeps the input length.
    pub fn sample_flat_list<T: Clone>(
        &mut self,
        items: &[T],
        count: Option<usize>,
    ) -> Result<Vec<T>, GenerationError> {
        primitives::sample_flat_list(&mut self.rng, items, count)
    }

    /// Distinct Swedish registration numbers, clamped to the domain size.
    pub fn registration_numbers(
        &mut self,
        count: usize,
    ) -> Result<RegistrationBatch, GenerationError> {
        self.registration_numbers_with(&RegistrationFormat::swedish(), count)
    }

    pub fn registration_numbers_with(
        &mut self,
        format: &RegistrationFormat,
        count: usize,
    ) -> Result<RegistrationBatch, GenerationError> {
        registration::registration_numbers(&mut self.rng, format, count)
    }

    pub fn colors(&mut self, count: usize) -> Result<Vec<String>, GenerationError> {
        primitives::sample_flat_list(&mut self.rng, &self.reference.colors, Some(count))
    }

    pub fn first_name(&mut self, gender: Gender) -> Result<String, GenerationError> {
        names::first_name(&mut self.rng, &self.reference.names, gender)
    }

    pub fn first_names(
        &mut self,
        count: usize,
        gender: Gender,
    ) -> Result<Vec<String>, GenerationError> {
        names::first_names(&mut self.rng, &self.reference.names, count, gender)
    }

    pub fn last_name(&mut self) -> Result<String, GenerationError> {
        names::last_name(&mut self.rng, &self.reference.names)
    }

    pub fn last_names(&mut self, count: usize) -> Result<Vec<String>, GenerationError> {
        names::last_names(&mut self.rng, &self.reference.names, count)
    }

    pub fn people(&mut self, count: usize, gender: Gender) -> Result<Vec<Person>, GenerationError> {
        names::people(&mut self.rng, &self.reference.names, count, gender)
    }

    pub fn date_time(
        &mut self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<NaiveDateTime, GenerationError> {
        temporal::date_time(&mut self.rng, from, to)
    }

    /// Independent draws; callers sort if they need ordered output.
    pub fn date_times(
        &mut self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        count: usize,
    ) -> Result<Vec<NaiveDateTime>, GenerationError> {
        temporal::date_times(&mut self.rng, from, to, count)
    }

    /// `count` integers in `[min, max)`.
    pub fn integers(
        &mut self,
        count: usize,
        min: i64,
        max: i64,
    ) -> Result<Vec<i64>, GenerationError> {
        primitives::integers(&mut self.rng, count, min, max)
    }

    /// Run a registered generator by id.
    pub fn generate(
        &mut self,
        registry: &GeneratorRegistry,
        id: &str,
        count: usize,
        params: Option<&Value>,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let ctx = GeneratorContext {
            reference: &self.reference,
            count,
        };
        let values = registry.generate(id, &ctx, params, &mut self.rng)?;
        debug!(event = "generator_finished", generator_id = id, count = values.len());
        Ok(values)
    }
}
