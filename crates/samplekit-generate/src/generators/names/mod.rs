use rand::{Rng, RngCore};
use serde_json::Value;

use samplekit_core::{Gender, NameTables};

use crate::errors::GenerationError;
use crate::generators::primitives::{fill_batch, pick};
use crate::generators::{GeneratedValue, Generator, GeneratorContext, GeneratorRegistry};
use crate::model::Person;
use crate::params::{ParamKind, ParamSpec, validate_params};

const GENDER_PARAMS: &[ParamSpec] = &[ParamSpec::new("gender", ParamKind::Gender, false)];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(FirstNameGenerator));
    registry.register_generator(Box::new(LastNameGenerator));
    registry.register_generator(Box::new(FullNameGenerator));
}

/// Resolve `Any` to a concrete list with equal odds per axis, not per name.
pub fn resolve_gender<R: Rng + ?Sized>(rng: &mut R, gender: Gender) -> Gender {
    match gender {
        Gender::Any => {
            if rng.random_bool(0.5) {
                Gender::Female
            } else {
                Gender::Male
            }
        }
        concrete => concrete,
    }
}

pub fn first_name<R: Rng + ?Sized>(
    rng: &mut R,
    names: &NameTables,
    gender: Gender,
) -> Result<String, GenerationError> {
    let gender = resolve_gender(rng, gender);
    let list = names.first_names(gender).unwrap_or_default();
    pick(rng, list).cloned().map_err(|_| {
        GenerationError::InvalidInput(format!("{gender} first-name list is empty"))
    })
}

pub fn first_names<R: Rng + ?Sized>(
    rng: &mut R,
    names: &NameTables,
    count: usize,
    gender: Gender,
) -> Result<Vec<String>, GenerationError> {
    fill_batch(count, || first_name(rng, names, gender))
}

pub fn last_name<R: Rng + ?Sized>(
    rng: &mut R,
    names: &NameTables,
) -> Result<String, GenerationError> {
    pick(rng, &names.last)
        .cloned()
        .map_err(|_| GenerationError::InvalidInput("last-name list is empty".to_string()))
}

pub fn last_names<R: Rng + ?Sized>(
    rng: &mut R,
    names: &NameTables,
    count: usize,
) -> Result<Vec<String>, GenerationError> {
    fill_batch(count, || last_name(rng, names))
}

/// First and last names are drawn independently of each other.
pub fn people<R: Rng + ?Sized>(
    rng: &mut R,
    names: &NameTables,
    count: usize,
    gender: Gender,
) -> Result<Vec<Person>, GenerationError> {
    fill_batch(count, || {
        Ok(Person {
            first_name: first_name(rng, names, gender)?,
            last_name: last_name(rng, names)?,
        })
    })
}

struct FirstNameGenerator;

impl Generator for FirstNameGenerator {
    fn id(&self) -> &'static str {
        "person.first_name"
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let params = validate_params(params, GENDER_PARAMS, "person.first_name")?;
        let gender = params.get_gender("gender").unwrap_or_default();
        let names = first_names(rng, &ctx.reference.names, ctx.count, gender)?;
        Ok(names.into_iter().map(GeneratedValue::Text).collect())
    }
}

struct LastNameGenerator;

impl Generator for LastNameGenerator {
    fn id(&self) -> &'static str {
        "person.last_name"
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        validate_params(params, &[], "person.last_name")?;
        let names = last_names(rng, &ctx.reference.names, ctx.count)?;
        Ok(names.into_iter().map(GeneratedValue::Text).collect())
    }
}

struct FullNameGenerator;

impl Generator for FullNameGenerator {
    fn id(&self) -> &'static str {
        "person.full_name"
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let params = validate_params(params, GENDER_PARAMS, "person.full_name")?;
        let gender = params.get_gender("gender").unwrap_or_default();
        let people = people(rng, &ctx.reference.names, ctx.count, gender)?;
        Ok(people.into_iter().map(GeneratedValue::Person).collect())
    }
}
