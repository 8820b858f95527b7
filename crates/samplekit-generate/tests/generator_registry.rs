use std::collections::HashSet;

use serde_json::json;

use samplekit_core::ReferenceTables;
use samplekit_generate::{GeneratedValue, GenerationError, GeneratorRegistry, SamplingEngine, checked_count};

#[test]
fn generator_ids_are_sorted_and_unique() {
    let registry = GeneratorRegistry::new();
    let ids = registry.generator_ids();
    assert!(!ids.is_empty());

    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(ids, sorted);
}

#[test]
fn registry_exposes_every_generator() {
    let registry = GeneratorRegistry::new();
    let expected = [
        "color",
        "list.resample",
        "person.first_name",
        "person.full_name",
        "person.last_name",
        "primitive.datetime.range",
        "primitive.int.range",
        "registration.se",
        "vehicle.aeroplane",
        "vehicle.boat",
        "vehicle.bus",
        "vehicle.car",
        "vehicle.motorcycle",
    ];
    assert_eq!(registry.generator_ids(), expected);
}

#[test]
fn generators_return_requested_count() {
    let registry = GeneratorRegistry::new();
    let mut engine = SamplingEngine::seeded(1);
    let list_params = json!({"items": ["Carol", "Suffragette", "The Hateful Eight"]});

    for id in registry.generator_ids() {
        let params = (id == "list.resample").then_some(&list_params);
        let values = engine
            .generate(&registry, id, 12, params)
            .unwrap_or_else(|err| panic!("{id} failed: {err}"));
        assert_eq!(values.len(), 12, "{id}");
    }
}

#[test]
fn vehicle_generator_yields_catalog_pairs() {
    let registry = GeneratorRegistry::new();
    let reference = ReferenceTables::swedish();
    let mut engine = SamplingEngine::seeded(2);

    let values = engine
        .generate(&registry, "vehicle.motorcycle", 20, None)
        .expect("motorcycles");
    for value in values {
        let GeneratedValue::Pair(pair) = value else {
            panic!("expected pair, got {}", value.kind());
        };
        assert!(reference.motorcycles.contains(&pair.category, &pair.item));
    }
}

#[test]
fn registration_generator_yields_distinct_plates() {
    let registry = GeneratorRegistry::new();
    let mut engine = SamplingEngine::seeded(3);
    let values = engine
        .generate(&registry, "registration.se", 300, None)
        .expect("plates");
    let distinct: HashSet<&str> = values.iter().filter_map(GeneratedValue::as_str).collect();
    assert_eq!(distinct.len(), 300);
}

#[test]
fn int_range_generator_uses_params() {
    let registry = GeneratorRegistry::new();
    let mut engine = SamplingEngine::seeded(4);
    let params = json!({"min": 100, "max": 103});
    let values = engine
        .generate(&registry, "primitive.int.range", 50, Some(&params))
        .expect("ints");
    assert!(
        values
            .iter()
            .filter_map(GeneratedValue::as_i64)
            .all(|value| (100..103).contains(&value))
    );
}

#[test]
fn int_range_generator_rejects_invalid_bounds() {
    let registry = GeneratorRegistry::new();
    let mut engine = SamplingEngine::seeded(5);
    let params = json!({"min": 10, "max": 1});
    let result = engine.generate(&registry, "primitive.int.range", 1, Some(&params));
    assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
}

#[test]
fn datetime_generator_uses_params() {
    let registry = GeneratorRegistry::new();
    let mut engine = SamplingEngine::seeded(6);
    let params = json!({"from": "2015-01-01T00:00:00", "to": "2015-01-02T00:00:00"});
    let values = engine
        .generate(&registry, "primitive.datetime.range", 3, Some(&params))
        .expect("timestamps");
    assert_eq!(values.len(), 3);
    for value in values {
        let timestamp = value.as_timestamp().expect("timestamp value");
        assert_eq!(timestamp.date().to_string().get(..7), Some("2015-01"));
    }
}

#[test]
fn datetime_generator_rejects_reversed_window() {
    let registry = GeneratorRegistry::new();
    let mut engine = SamplingEngine::seeded(7);
    let params = json!({"from": "2016-01-01T00:00:00", "to": "2015-01-01T00:00:00"});
    let result = engine.generate(&registry, "primitive.datetime.range", 1, Some(&params));
    assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
}

#[test]
fn gender_param_restricts_first_names() {
    let registry = GeneratorRegistry::new();
    let reference = ReferenceTables::swedish();
    let mut engine = SamplingEngine::seeded(8);
    let params = json!({"gender": "male"});
    let values = engine
        .generate(&registry, "person.first_name", 40, Some(&params))
        .expect("names");
    assert!(
        values
            .iter()
            .filter_map(GeneratedValue::as_str)
            .all(|name| reference.names.male.iter().any(|male| male == name))
    );
}

#[test]
fn invalid_params_are_rejected() {
    let registry = GeneratorRegistry::new();
    let mut engine = SamplingEngine::seeded(9);
    let cases = [
        ("person.full_name", json!({"gender": "other"})),
        ("color", json!({"count": 3})),
        ("list.resample", json!({})),
        ("list.resample", json!({"items": "Carol"})),
        ("primitive.datetime.range", json!({"from": "someday"})),
        ("vehicle.car", json!("cars")),
    ];
    for (id, params) in cases {
        let result = engine.generate(&registry, id, 1, Some(&params));
        assert!(
            matches!(result, Err(GenerationError::InvalidInput(_))),
            "{id} accepted {params}"
        );
    }
}

#[test]
fn empty_resample_list_is_invalid() {
    let registry = GeneratorRegistry::new();
    let mut engine = SamplingEngine::seeded(10);
    let params = json!({"items": []});
    let result = engine.generate(&registry, "list.resample", 2, Some(&params));
    assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
}

#[test]
fn unknown_generator_is_reported() {
    let registry = GeneratorRegistry::new();
    let mut engine = SamplingEngine::seeded(11);
    let result = engine.generate(&registry, "vehicle.tractor", 1, None);
    assert!(matches!(result, Err(GenerationError::UnknownGenerator(id)) if id == "vehicle.tractor"));
}

#[test]
fn largest_signed_count_is_invalid_input() {
    let registry = GeneratorRegistry::new();
    let mut engine = SamplingEngine::seeded(12);
    let count = checked_count(i64::MAX).expect("non-negative count");
    for id in ["vehicle.car", "primitive.int.range", "person.full_name"] {
        let result = engine.generate(&registry, id, count, None);
        assert!(
            matches!(result, Err(GenerationError::InvalidInput(_))),
            "{id} accepted count {count}"
        );
    }
}

#[test]
fn checked_count_rejects_negative_counts() {
    assert_eq!(checked_count(0).ok(), Some(0));
    assert_eq!(checked_count(25).ok(), Some(25));
    assert!(matches!(
        checked_count(-1),
        Err(GenerationError::InvalidInput(_))
    ));
}
