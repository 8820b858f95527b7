use rand::{Rng, RngCore};
use serde_json::Value;

use crate::errors::GenerationError;
use crate::generators::{GeneratedValue, Generator, GeneratorContext, GeneratorRegistry};
use crate::params::{ParamKind, ParamSpec, validate_params};

const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = 10;

const INT_RANGE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("min", ParamKind::Int, false),
    ParamSpec::new("max", ParamKind::Int, false),
];
const LIST_RESAMPLE_PARAMS: &[ParamSpec] = &[ParamSpec::new("items", ParamKind::StringList, true)];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(IntRangeGenerator));
    registry.register_generator(Box::new(ListResampleGenerator));
}

/// Uniform index in `[0, len)`.
pub fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Result<usize, GenerationError> {
    if len == 0 {
        return Err(GenerationError::InvalidInput(
            "cannot pick from an empty sequence".to_string(),
        ));
    }
    Ok(rng.random_range(0..len))
}

/// Uniformly chosen element of `items`.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Result<&'a T, GenerationError> {
    let index = pick_index(rng, items.len())?;
    Ok(&items[index])
}

/// Empty batch with room for `count` values.
///
/// Counts whose allocation cannot be satisfied are `InvalidInput`, not an abort.
pub(crate) fn batch_with_capacity<T>(count: usize) -> Result<Vec<T>, GenerationError> {
    let mut batch = Vec::new();
    batch.try_reserve_exact(count).map_err(|_| count_too_large(count))?;
    Ok(batch)
}

pub(crate) fn count_too_large(count: usize) -> GenerationError {
    GenerationError::InvalidInput(format!("count {count} is too large to allocate"))
}

/// `count` values from `draw`, stopping at the first error.
pub(crate) fn fill_batch<T, F>(count: usize, mut draw: F) -> Result<Vec<T>, GenerationError>
where
    F: FnMut() -> Result<T, GenerationError>,
{
    let mut batch = batch_with_capacity(count)?;
    for _ in 0..count {
        batch.push(draw()?);
    }
    Ok(batch)
}

/// `count` independent draws with replacement; `None` draws `items.len()`.
pub fn sample_flat_list<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
    count: Option<usize>,
) -> Result<Vec<T>, GenerationError> {
    if items.is_empty() {
        return Err(GenerationError::InvalidInput(
            "item list must not be empty".to_string(),
        ));
    }
    let count = count.unwrap_or(items.len());
    fill_batch(count, || pick(rng, items).cloned())
}

/// `count` integers uniform over `[min, max)`.
pub fn integers<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    min: i64,
    max: i64,
) -> Result<Vec<i64>, GenerationError> {
    if min >= max {
        return Err(GenerationError::InvalidInput(format!(
            "integer range requires min < max, got [{min}, {max})"
        )));
    }
    fill_batch(count, || Ok(rng.random_range(min..max)))
}

struct IntRangeGenerator;

impl Generator for IntRangeGenerator {
    fn id(&self) -> &'static str {
        "primitive.int.range"
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let params = validate_params(params, INT_RANGE_PARAMS, "primitive.int.range")?;
        let min = params.get_i64("min").unwrap_or(DEFAULT_INT_MIN);
        let max = params.get_i64("max").unwrap_or(DEFAULT_INT_MAX);
        let values = integers(rng, ctx.count, min, max)?;
        Ok(values.into_iter().map(GeneratedValue::Int).collect())
    }
}

struct ListResampleGenerator;

impl Generator for ListResampleGenerator {
    fn id(&self) -> &'static str {
        "list.resample"
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let params = validate_params(params, LIST_RESAMPLE_PARAMS, "list.resample")?;
        let items = params.get_str_list("items").unwrap_or_default();
        let values = sample_flat_list(rng, &items, Some(ctx.count))?;
        Ok(values.into_iter().map(GeneratedValue::Text).collect())
    }
}
