use std::sync::{Arc, OnceLock};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceCatalog;
use crate::tables;
use crate::types::{Gender, VehicleKind};

/// First- and last-name lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NameTables {
    pub female: Vec<String>,
    pub male: Vec<String>,
    pub last: Vec<String>,
}

impl NameTables {
    /// First-name list for a concrete gender; `Any` has no list of its own.
    pub fn first_names(&self, gender: Gender) -> Option<&[String]> {
        match gender {
            Gender::Female => Some(&self.female),
            Gender::Male => Some(&self.male),
            Gender::Any => None,
        }
    }
}

/// Everything a sampling engine draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReferenceTables {
    pub aeroplanes: ReferenceCatalog,
    pub boats: ReferenceCatalog,
    pub buses: ReferenceCatalog,
    pub cars: ReferenceCatalog,
    pub motorcycles: ReferenceCatalog,
    pub colors: Vec<String>,
    pub names: NameTables,
}

impl ReferenceTables {
    /// Bundled Swedish tables, built once and shared.
    pub fn swedish() -> Arc<ReferenceTables> {
        static TABLES: OnceLock<Arc<ReferenceTables>> = OnceLock::new();
        TABLES
            .get_or_init(|| {
                Arc::new(ReferenceTables {
                    aeroplanes: ReferenceCatalog::from_static(tables::AEROPLANES),
                    boats: ReferenceCatalog::from_static(tables::BOATS),
                    buses: ReferenceCatalog::from_static(tables::BUSES),
                    cars: ReferenceCatalog::from_static(tables::CARS),
                    motorcycles: ReferenceCatalog::from_static(tables::MOTORCYCLES),
                    colors: to_owned(tables::COLORS),
                    names: NameTables {
                        female: to_owned(tables::FEMALE_FIRST_NAMES),
                        male: to_owned(tables::MALE_FIRST_NAMES),
                        last: to_owned(tables::LAST_NAMES),
                    },
                })
            })
            .clone()
    }

    pub fn vehicles(&self, kind: VehicleKind) -> &ReferenceCatalog {
        match kind {
            VehicleKind::Aeroplane => &self.aeroplanes,
            VehicleKind::Boat => &self.boats,
            VehicleKind::Bus => &self.buses,
            VehicleKind::Car => &self.cars,
            VehicleKind::Motorcycle => &self.motorcycles,
        }
    }

    pub fn vehicle_catalogs(&self) -> impl Iterator<Item = (VehicleKind, &ReferenceCatalog)> {
        VehicleKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.vehicles(kind)))
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
