use std::collections::BTreeMap;

use crate::catalog::MealCatalog;
use crate::models::{Category, MealItem};

/// Meals suggested per category. Every category is present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestions {
    by_category: BTreeMap<Category, Vec<MealItem>>,
}

impl Suggestions {
    pub fn get(&self, category: Category) -> &[MealItem] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Categories with at least one match, in category order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &[MealItem])> {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.get(c)))
            .filter(|(_, meals)| !meals.is_empty())
    }

    pub fn total(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Suggest catalog meals whose name contains any grocery name.
///
/// Matching is a case-insensitive substring test on the meal name, so
/// "egg" matches "Bacon and Eggs". Names are compared as given: an empty
/// name matches every meal.
pub fn suggest_from_groceries<S: AsRef<str>>(
    grocery_names: &[S],
    catalog: &MealCatalog,
) -> Suggestions {
    let needles: Vec<String> = grocery_names
        .iter()
        .map(|n| n.as_ref().to_lowercase())
        .collect();

    let by_category = catalog
        .iter()
        .map(|(category, items)| {
            let matches: Vec<MealItem> = items
                .iter()
                .filter(|meal| needles.iter().any(|needle| meal.name_contains(needle)))
                .cloned()
                .collect();
            (category, matches)
        })
        .collect();

    Suggestions { by_category }
}
