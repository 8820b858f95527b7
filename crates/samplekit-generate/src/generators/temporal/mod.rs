use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::{Rng, RngCore};
use serde_json::Value;

use crate::errors::GenerationError;
use crate::generators::primitives::fill_batch;
use crate::generators::{GeneratedValue, Generator, GeneratorContext, GeneratorRegistry};
use crate::params::{ParamKind, ParamSpec, validate_params};

const DATETIME_RANGE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("from", ParamKind::Timestamp, false),
    ParamSpec::new("to", ParamKind::Timestamp, false),
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(DateTimeRangeGenerator));
}

/// Uniform timestamp in `[from, to]`: `from + fraction * (to - from)` with
/// the fraction drawn from `[0, 1)`.
pub fn date_time<R: Rng + ?Sized>(
    rng: &mut R,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Result<NaiveDateTime, GenerationError> {
    if from > to {
        return Err(GenerationError::InvalidInput(format!(
            "date range requires from <= to, got {from} > {to}"
        )));
    }
    let span = to - from;
    let fraction: f64 = rng.random();
    let offset = scaled_offset(span, fraction);
    // Float rounding may land a hair past `to`.
    Ok((from + offset).min(to))
}

pub fn date_times<R: Rng + ?Sized>(
    rng: &mut R,
    from: NaiveDateTime,
    to: NaiveDateTime,
    count: usize,
) -> Result<Vec<NaiveDateTime>, GenerationError> {
    fill_batch(count, || date_time(rng, from, to))
}

/// Nanosecond resolution while the span fits in i64 nanoseconds (~292
/// years), milliseconds beyond that.
fn scaled_offset(span: TimeDelta, fraction: f64) -> TimeDelta {
    match span.num_nanoseconds() {
        Some(nanos) => TimeDelta::nanoseconds((nanos as f64 * fraction) as i64),
        None => TimeDelta::milliseconds((span.num_milliseconds() as f64 * fraction) as i64),
    }
}

fn default_from() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1980, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn default_to() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1990, 12, 31)
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .unwrap_or_default()
}

struct DateTimeRangeGenerator;

impl Generator for DateTimeRangeGenerator {
    fn id(&self) -> &'static str {
        "primitive.datetime.range"
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let params = validate_params(params, DATETIME_RANGE_PARAMS, "primitive.datetime.range")?;
        let from = params.get_timestamp("from").unwrap_or_else(default_from);
        let to = params.get_timestamp("to").unwrap_or_else(default_to);
        let values = date_times(rng, from, to, ctx.count)?;
        Ok(values.into_iter().map(GeneratedValue::Timestamp).collect())
    }
}
