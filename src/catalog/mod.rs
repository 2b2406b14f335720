mod loader;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, MealItem};

pub use loader::{builtin_catalog, load_catalog, parse_catalog, BUILTIN_CATALOG_JSON};

/// Meal options grouped by category.
///
/// A category that was never populated reads as an empty sequence.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MealCatalog {
    categories: BTreeMap<Category, Vec<MealItem>>,
}

impl MealCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any existing items for the category.
    pub fn with_category(mut self, category: Category, items: Vec<MealItem>) -> Self {
        self.categories.insert(category, items);
        self
    }

    pub fn items(&self, category: Category) -> &[MealItem] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All four categories in order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[MealItem])> {
        Category::ALL.into_iter().map(move |c| (c, self.items(c)))
    }

    /// Find a meal by exact name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<(Category, &MealItem)> {
        let key = name.trim().to_lowercase();
        self.iter()
            .flat_map(|(c, items)| items.iter().map(move |m| (c, m)))
            .find(|(_, m)| m.key() == key)
    }

    /// Every meal paired with its category, in catalog order.
    pub fn all_meals(&self) -> Vec<(Category, &MealItem)> {
        self.iter()
            .flat_map(|(c, items)| items.iter().map(move |m| (c, m)))
            .collect()
    }

    /// Total number of meals across categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn insert_items(&mut self, category: Category, items: Vec<MealItem>) {
        self.categories.entry(category).or_default().extend(items);
    }
}

// Missing and empty categories compare equal.
impl PartialEq for MealCatalog {
    fn eq(&self, other: &Self) -> bool {
        Category::ALL
            .into_iter()
            .all(|c| self.items(c) == other.items(c))
    }
}
