use crate::catalog::ReferenceCatalog;
use crate::error::{Error, Result};
use crate::reference::ReferenceTables;

/// Validate internal consistency of a catalog.
///
/// This checks:
/// - the catalog has at least one category
/// - no category label is blank
/// - every category lists at least one item
pub fn validate_catalog(catalog: &ReferenceCatalog) -> Result<()> {
    if catalog.is_empty() {
        return Err(Error::InvalidCatalog(
            "catalog must contain at least one category".to_string(),
        ));
    }

    for (category, items) in catalog.iter() {
        if category.trim().is_empty() {
            return Err(Error::InvalidCatalog(
                "category label must not be blank".to_string(),
            ));
        }
        if items.is_empty() {
            return Err(Error::InvalidCatalog(format!(
                "category '{category}' has no items"
            )));
        }
    }

    Ok(())
}

/// Validate that a flat table has at least one entry.
pub fn validate_items<T>(table: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(Error::InvalidTable(format!("{table} must not be empty")));
    }
    Ok(())
}

/// Validate every catalog and list in a reference set.
pub fn validate_reference_tables(tables: &ReferenceTables) -> Result<()> {
    for (kind, catalog) in tables.vehicle_catalogs() {
        validate_catalog(catalog)
            .map_err(|err| Error::InvalidCatalog(format!("{kind}: {err}")))?;
    }
    validate_items("colors", &tables.colors)?;
    validate_items("female first names", &tables.names.female)?;
    validate_items("male first names", &tables.names.male)?;
    validate_items("last names", &tables.names.last)?;
    Ok(())
}
