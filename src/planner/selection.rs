use rand::Rng;

use crate::catalog::MealCatalog;
use crate::error::{FitError, Result};
use crate::models::{Category, DailyPlan, MealItem, PlanMeals};
use crate::planner::filter::eligible_meals;

/// Draw one meal uniformly from a pool.
///
/// Fails with `EmptySelectionPool` rather than falling back to another meal.
pub fn pick_random<'a, R: Rng + ?Sized>(
    pool: &'a [MealItem],
    category: Category,
    rng: &mut R,
) -> Result<&'a MealItem> {
    if pool.is_empty() {
        return Err(FitError::EmptySelectionPool(category));
    }
    Ok(&pool[rng.gen_range(0..pool.len())])
}

/// Positional pick for a day offset, wrapping when the pool is short.
pub fn pick_positional(
    pool: &[MealItem],
    category: Category,
    offset: usize,
) -> Result<&MealItem> {
    if pool.is_empty() {
        return Err(FitError::EmptySelectionPool(category));
    }
    Ok(&pool[offset % pool.len()])
}

/// Build a plan by asking `pick` for each category in order.
///
/// Stops at the first failing category.
fn build_plan<'a, F>(label: &str, mut pick: F) -> Result<DailyPlan>
where
    F: FnMut(Category) -> Result<&'a MealItem>,
{
    let meals = PlanMeals {
        breakfast: pick(Category::Breakfast)?.clone(),
        lunch: pick(Category::Lunch)?.clone(),
        dinner: pick(Category::Dinner)?.clone(),
        snacks: pick(Category::Snacks)?.clone(),
    };
    Ok(DailyPlan::new(label, meals))
}

/// Deterministic initial plans.
///
/// Day `i` takes item `i` of every category of the (already filtered)
/// catalog.
pub fn seeded_plans<S: AsRef<str>>(catalog: &MealCatalog, labels: &[S]) -> Result<Vec<DailyPlan>> {
    labels
        .iter()
        .enumerate()
        .map(|(offset, label)| {
            build_plan(label.as_ref(), |c| {
                pick_positional(catalog.items(c), c, offset)
            })
        })
        .collect()
}

/// Randomized plans: every category of every day is an independent
/// uniform draw from the (already filtered) catalog.
///
/// Either every plan is produced or the first empty category is reported.
pub fn generate_plans<S: AsRef<str>, R: Rng + ?Sized>(
    catalog: &MealCatalog,
    labels: &[S],
    rng: &mut R,
) -> Result<Vec<DailyPlan>> {
    if let Some((category, _)) = catalog.iter().find(|(_, items)| items.is_empty()) {
        return Err(FitError::EmptySelectionPool(category));
    }

    labels
        .iter()
        .map(|label| build_plan(label.as_ref(), |c| pick_random(catalog.items(c), c, &mut *rng)))
        .collect()
}

/// Replace one category with a fresh random draw from the eligible meals.
///
/// The input plan is left untouched; the swapped copy is returned.
pub fn swap_meal<R: Rng + ?Sized>(
    plan: &DailyPlan,
    category: Category,
    catalog: &MealCatalog,
    vegetarian_only: bool,
    rng: &mut R,
) -> Result<DailyPlan> {
    let pool = eligible_meals(catalog, category, vegetarian_only);
    let meal = pick_random(&pool, category, rng)?.clone();
    Ok(plan.with_meal(category, meal))
}

/// Put a specific meal into a category, ignoring diet and catalog membership.
pub fn select_meal(plan: &DailyPlan, category: Category, meal: MealItem) -> DailyPlan {
    plan.with_meal(category, meal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn meal(name: &str, veg: bool) -> MealItem {
        MealItem::new(name, 300.0, 10.0, 30.0, 10.0, veg)
    }

    fn sample_catalog() -> MealCatalog {
        MealCatalog::new()
            .with_category(Category::Breakfast, vec![meal("Oatmeal", true), meal("Bacon and Eggs", false)])
            .with_category(Category::Lunch, vec![meal("Quinoa Bowl", true), meal("Chicken Salad", false)])
            .with_category(Category::Dinner, vec![meal("Lentil Curry", true), meal("Salmon", false)])
            .with_category(Category::Snacks, vec![meal("Protein Bar", true)])
    }

    #[test]
    fn test_pick_random_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = pick_random(&[], Category::Dinner, &mut rng).unwrap_err();
        assert!(matches!(err, FitError::EmptySelectionPool(Category::Dinner)));
    }

    #[test]
    fn test_seeded_plans_use_day_offset() {
        let plans = seeded_plans(&sample_catalog(), &["Today", "Tomorrow"]).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].label, "Today");
        assert_eq!(plans[0].meal(Category::Breakfast).name, "Oatmeal");
        assert_eq!(plans[1].meal(Category::Breakfast).name, "Bacon and Eggs");
        assert_eq!(plans[1].meal(Category::Lunch).name, "Chicken Salad");
    }

    #[test]
    fn test_seeded_plans_wrap_short_pool() {
        let plans = seeded_plans(&sample_catalog(), &["Today", "Tomorrow", "Day 3"]).unwrap();
        assert_eq!(plans[1].meal(Category::Snacks).name, "Protein Bar");
        assert_eq!(plans[2].meal(Category::Breakfast).name, "Oatmeal");
    }

    #[test]
    fn test_generate_plans_same_seed_same_result() {
        let catalog = sample_catalog();
        let a = generate_plans(&catalog, &["Today", "Tomorrow"], &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_plans(&catalog, &["Today", "Tomorrow"], &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_plans_reports_first_empty_category() {
        let catalog = sample_catalog()
            .with_category(Category::Lunch, Vec::new())
            .with_category(Category::Snacks, Vec::new());
        let mut rng = StdRng::seed_from_u64(3);
        let err = generate_plans(&catalog, &["Today"], &mut rng).unwrap_err();
        assert!(matches!(err, FitError::EmptySelectionPool(Category::Lunch)));
    }

    #[test]
    fn test_generate_plans_no_labels() {
        let mut rng = StdRng::seed_from_u64(3);
        let labels: [&str; 0] = [];
        assert!(generate_plans(&sample_catalog(), &labels, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_swap_respects_diet() {
        let catalog = sample_catalog();
        let plan = seeded_plans(&catalog, &["Tomorrow"]).unwrap().remove(0);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let swapped = swap_meal(&plan, Category::Dinner, &catalog, true, &mut rng).unwrap();
            assert_eq!(swapped.meal(Category::Dinner).name, "Lentil Curry");
        }
    }

    #[test]
    fn test_swap_empty_pool_leaves_plan() {
        let catalog = sample_catalog()
            .with_category(Category::Snacks, vec![meal("Jerky", false)]);
        let plan = seeded_plans(&catalog, &["Today"]).unwrap().remove(0);
        let before = plan.clone();
        let mut rng = StdRng::seed_from_u64(5);

        let err = swap_meal(&plan, Category::Snacks, &catalog, true, &mut rng).unwrap_err();
        assert!(matches!(err, FitError::EmptySelectionPool(Category::Snacks)));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_select_meal_ignores_diet() {
        let plan = seeded_plans(&sample_catalog(), &["Today"]).unwrap().remove(0);
        let steak = meal("Steak", false);
        let updated = select_meal(&plan, Category::Dinner, steak.clone());
        assert_eq!(updated.meal(Category::Dinner), &steak);
        assert_eq!(updated.meal(Category::Lunch), plan.meal(Category::Lunch));
    }
}
