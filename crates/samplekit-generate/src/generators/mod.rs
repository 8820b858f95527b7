use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rand::RngCore;
use serde_json::{Value, json};

use samplekit_core::ReferenceTables;

use crate::errors::GenerationError;
use crate::model::{CategoryPair, Person};

pub mod catalog;
pub mod names;
pub mod primitives;
pub mod registration;
pub mod temporal;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Int(i64),
    Text(String),
    Pair(CategoryPair),
    Person(Person),
    Timestamp(NaiveDateTime),
}

impl GeneratedValue {
    pub fn kind(&self) -> &'static str {
        match self {
            GeneratedValue::Int(_) => "int",
            GeneratedValue::Text(_) => "text",
            GeneratedValue::Pair(_) => "pair",
            GeneratedValue::Person(_) => "person",
            GeneratedValue::Timestamp(_) => "timestamp",
        }
    }

    /// Single-line rendering used by the plain text output.
    pub fn to_text(&self) -> String {
        match self {
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Text(value) => value.clone(),
            GeneratedValue::Pair(pair) => pair.to_string(),
            GeneratedValue::Person(person) => person.to_string(),
            GeneratedValue::Timestamp(value) => value.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn csv_header(&self) -> &'static [&'static str] {
        match self {
            GeneratedValue::Int(_) | GeneratedValue::Text(_) | GeneratedValue::Timestamp(_) => {
                &["value"]
            }
            GeneratedValue::Pair(_) => &["category", "item"],
            GeneratedValue::Person(_) => &["first_name", "last_name"],
        }
    }

    pub fn csv_record(&self) -> Vec<String> {
        match self {
            GeneratedValue::Pair(pair) => vec![pair.category.clone(), pair.item.clone()],
            GeneratedValue::Person(person) => {
                vec![person.first_name.clone(), person.last_name.clone()]
            }
            other => vec![other.to_text()],
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            GeneratedValue::Int(value) => json!(value),
            GeneratedValue::Text(value) => json!(value),
            GeneratedValue::Pair(pair) => json!({"category": pair.category, "item": pair.item}),
            GeneratedValue::Person(person) => {
                json!({"first_name": person.first_name, "last_name": person.last_name})
            }
            GeneratedValue::Timestamp(value) => {
                json!(value.format(TIMESTAMP_FORMAT).to_string())
            }
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            GeneratedValue::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}

/// Inputs shared by every generator invocation.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub reference: &'a ReferenceTables,
    pub count: usize,
}

/// A named batch generator addressable by id.
pub trait Generator: Send + Sync {
    fn id(&self) -> &'static str;

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError>;
}

/// Registry of generators keyed by id.
pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            generators: BTreeMap::new(),
        };
        catalog::register(&mut registry);
        names::register(&mut registry);
        primitives::register(&mut registry);
        registration::register(&mut registry);
        temporal::register(&mut registry);
        registry
    }

    pub fn register_generator(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.id(), generator);
    }

    pub fn generator(&self, id: &str) -> Option<&dyn Generator> {
        self.generators.get(id).map(|generator| generator.as_ref())
    }

    /// Registered ids in sorted order.
    pub fn generator_ids(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }

    pub fn generate(
        &self,
        id: &str,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        let generator = self
            .generator(id)
            .ok_or_else(|| GenerationError::UnknownGenerator(id.to_string()))?;
        generator.generate(ctx, params, rng)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generator_ids())
            .finish()
    }
}

/// Convert a signed, caller-supplied count into a batch size.
pub fn checked_count(count: i64) -> Result<usize, GenerationError> {
    usize::try_from(count).map_err(|_| {
        GenerationError::InvalidInput(format!("count must be >= 0, got {count}"))
    })
}
