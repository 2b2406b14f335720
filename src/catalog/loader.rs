use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::catalog::MealCatalog;
use crate::error::{FitError, Result};
use crate::models::{Category, MealItem};

/// The catalog shipped with the binary.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/meal_options.json");

/// Parse the built-in catalog.
pub fn builtin_catalog() -> Result<MealCatalog> {
    parse_catalog(BUILTIN_CATALOG_JSON)
}

/// Load a catalog from a JSON file keyed by category name.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse catalog JSON.
///
/// Keys must name a known category; every meal must pass validation.
/// Keys differing only in case are merged into one category.
pub fn parse_catalog(json: &str) -> Result<MealCatalog> {
    let raw: BTreeMap<String, Vec<MealItem>> = serde_json::from_str(json)?;

    let mut catalog = MealCatalog::new();
    for (key, items) in raw {
        let category: Category = key.parse()?;

        if let Some(bad) = items.iter().find(|m| !m.is_valid()) {
            return Err(FitError::InvalidInput(format!(
                "invalid meal '{}' in {}",
                bad.name, category
            )));
        }

        catalog.insert_items(category, items);
    }

    Ok(catalog)
}
