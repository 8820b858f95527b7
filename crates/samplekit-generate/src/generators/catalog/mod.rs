use rand::{Rng, RngCore};
use serde_json::Value;

use samplekit_core::{ReferenceCatalog, VehicleKind};

use crate::errors::GenerationError;
use crate::generators::primitives::{fill_batch, pick, pick_index, sample_flat_list};
use crate::generators::{GeneratedValue, Generator, GeneratorContext, GeneratorRegistry};
use crate::model::CategoryPair;
use crate::params::validate_params;

pub fn register(registry: &mut GeneratorRegistry) {
    for kind in VehicleKind::ALL {
        registry.register_generator(Box::new(VehicleModelGenerator { kind }));
    }
    registry.register_generator(Box::new(ColorGenerator));
}

/// `count` independent (category, item) draws: a category uniformly among the
/// catalog keys, then an item uniformly within that category.
pub fn sample_category_pairs<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &ReferenceCatalog,
    count: usize,
) -> Result<Vec<CategoryPair>, GenerationError> {
    fill_batch(count, || sample_category_pair(rng, catalog))
}

fn sample_category_pair<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &ReferenceCatalog,
) -> Result<CategoryPair, GenerationError> {
    let index = pick_index(rng, catalog.len())
        .map_err(|_| GenerationError::InvalidInput("catalog has no categories".to_string()))?;
    let (category, items) = catalog.entry_at(index).ok_or_else(|| {
        GenerationError::InvalidInput(format!("catalog category {index} out of range"))
    })?;
    let item = pick(rng, items).map_err(|_| {
        GenerationError::InvalidInput(format!("catalog category '{category}' has no items"))
    })?;
    Ok(CategoryPair {
        category: category.to_string(),
        item: item.clone(),
    })
}

struct VehicleModelGenerator {
    kind: VehicleKind,
}

impl Generator for VehicleModelGenerator {
    fn id(&self) -> &'static str {
        match self.kind {
            VehicleKind::Aeroplane => "vehicle.aeroplane",
            VehicleKind::Boat => "vehicle.boat",
            VehicleKind::Bus => "vehicle.bus",
            VehicleKind::Car => "vehicle.car",
            VehicleKind::Motorcycle => "vehicle.motorcycle",
        }
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        validate_params(params, &[], "vehicle")?;
        let pairs = sample_category_pairs(rng, ctx.reference.vehicles(self.kind), ctx.count)?;
        Ok(pairs.into_iter().map(GeneratedValue::Pair).collect())
    }
}

struct ColorGenerator;

impl Generator for ColorGenerator {
    fn id(&self) -> &'static str {
        "color"
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        validate_params(params, &[], "color")?;
        let colors = sample_flat_list(rng, &ctx.reference.colors, Some(ctx.count))?;
        Ok(colors.into_iter().map(GeneratedValue::Text).collect())
    }
}
