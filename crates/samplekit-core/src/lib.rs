//! Reference data contracts for samplekit.
//!
//! This crate defines the catalogs and name tables the sampling engine draws
//! from, their validation rules, and the bundled Swedish reference data.

pub mod catalog;
pub mod error;
pub mod reference;
pub mod tables;
pub mod types;
pub mod validation;

pub use catalog::ReferenceCatalog;
pub use error::{Error, Result};
pub use reference::{NameTables, ReferenceTables};
pub use types::{Gender, VehicleKind};
pub use validation::{validate_catalog, validate_items, validate_reference_tables};

/// Symbols allowed in Swedish registration numbers: A-Z without I, Q and V.
pub const SWEDISH_REGISTRATION_ALPHABET: &str = "ABCDEFGHJKLMNOPRSTUWXYZ";
