use std::collections::{BTreeMap, HashSet};

use samplekit_core::{
    Error, Gender, ReferenceCatalog, ReferenceTables, SWEDISH_REGISTRATION_ALPHABET, VehicleKind,
    validate_reference_tables,
};

#[test]
fn bundled_tables_are_valid() {
    let tables = ReferenceTables::swedish();
    validate_reference_tables(&tables).expect("bundled tables valid");
}

#[test]
fn bundled_tables_cover_every_vehicle_kind() {
    let tables = ReferenceTables::swedish();
    assert!(tables.vehicles(VehicleKind::Car).contains("Audi", "A4"));
    assert!(tables.vehicles(VehicleKind::Bus).contains("Volvo", "9700"));
    assert!(tables.vehicles(VehicleKind::Aeroplane).contains("Boeing", "747 Jumbojet"));
    assert!(tables.vehicles(VehicleKind::Boat).contains("Nimbus", "305 Coupé"));
    assert!(
        tables
            .vehicles(VehicleKind::Motorcycle)
            .contains("Husqvarna", "Modell 282 Silverpilen")
    );
    assert_eq!(tables.vehicle_catalogs().count(), VehicleKind::ALL.len());
}

#[test]
fn name_tables_split_by_gender() {
    let tables = ReferenceTables::swedish();
    let female = tables.names.first_names(Gender::Female).expect("female list");
    let male = tables.names.first_names(Gender::Male).expect("male list");
    assert!(female.iter().any(|name| name == "Astrid"));
    assert!(male.iter().any(|name| name == "Hjalmar"));
    assert!(tables.names.first_names(Gender::Any).is_none());
}

#[test]
fn swedish_tables_are_shared() {
    let first = ReferenceTables::swedish();
    let second = ReferenceTables::swedish();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[test]
fn registration_alphabet_excludes_ambiguous_letters() {
    let symbols: HashSet<char> = SWEDISH_REGISTRATION_ALPHABET.chars().collect();
    assert_eq!(symbols.len(), 23);
    assert_eq!(SWEDISH_REGISTRATION_ALPHABET.chars().count(), 23);
    for excluded in ['I', 'Q', 'V'] {
        assert!(!symbols.contains(&excluded));
    }
}

#[test]
fn catalog_rejects_empty_input() {
    let result = ReferenceCatalog::new(BTreeMap::new());
    assert!(matches!(result, Err(Error::InvalidCatalog(_))));

    let result = ReferenceCatalog::from_entries([("Lada", Vec::<&str>::new())]);
    assert!(matches!(result, Err(Error::InvalidCatalog(_))));
}

#[test]
fn catalog_merges_repeated_categories() {
    let catalog =
        ReferenceCatalog::from_entries([("Volvo", vec!["240"]), ("Volvo", vec!["740"])])
            .expect("valid catalog");
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.items("Volvo").map(<[String]>::len),
        Some(2)
    );
    assert_eq!(catalog.entry_at(0).map(|(category, _)| category), Some("Volvo"));
    assert!(catalog.entry_at(1).is_none());
}
