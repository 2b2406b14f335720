use crate::catalog::MealCatalog;
use crate::models::{Category, MealItem};

/// Whether a meal is allowed under the dietary preference.
///
/// Unrestricted mode admits everything, vegetarian dishes included.
#[inline]
pub fn is_eligible(meal: &MealItem, vegetarian_only: bool) -> bool {
    !vegetarian_only || meal.is_vegetarian
}

/// Eligible meals of one category, in catalog order.
pub fn eligible_meals(
    catalog: &MealCatalog,
    category: Category,
    vegetarian_only: bool,
) -> Vec<MealItem> {
    catalog
        .items(category)
        .iter()
        .filter(|m| is_eligible(m, vegetarian_only))
        .cloned()
        .collect()
}

/// Restrict a catalog to the meals allowed by the dietary preference.
///
/// Stable per category. A category may come back empty.
pub fn filter_by_diet(catalog: &MealCatalog, vegetarian_only: bool) -> MealCatalog {
    if !vegetarian_only {
        return catalog.clone();
    }

    Category::ALL
        .into_iter()
        .fold(MealCatalog::new(), |filtered, category| {
            filtered.with_category(category, eligible_meals(catalog, category, true))
        })
}
