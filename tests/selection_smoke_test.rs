use rand::rngs::StdRng;
use rand::SeedableRng;

use fit_planner_rs::catalog::{builtin_catalog, MealCatalog};
use fit_planner_rs::models::{Category, MealItem};
use fit_planner_rs::planner::{
    filter_by_diet, generate_plans, seeded_plans, select_meal, swap_meal, DEFAULT_DAY_LABELS,
};
use fit_planner_rs::FitError;

fn meal(name: &str, veg: bool) -> MealItem {
    MealItem::new(name, 400.0, 20.0, 40.0, 15.0, veg)
}

fn breakfast_only_scenario() -> MealCatalog {
    MealCatalog::new()
        .with_category(
            Category::Breakfast,
            vec![meal("Oatmeal", true), meal("Bacon and Eggs", false)],
        )
        .with_category(Category::Lunch, vec![meal("Quinoa Bowl", true)])
        .with_category(Category::Dinner, vec![meal("Lentil Curry", true)])
        .with_category(Category::Snacks, vec![meal("Protein Bar", true)])
}

#[test]
fn test_vegetarian_filter_scenario() {
    let filtered = filter_by_diet(&breakfast_only_scenario(), true);
    assert_eq!(filtered.items(Category::Breakfast), &[meal("Oatmeal", true)]);
}

#[test]
fn test_vegetarian_generation_always_picks_oatmeal() {
    let filtered = filter_by_diet(&breakfast_only_scenario(), true);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plans = generate_plans(&filtered, &DEFAULT_DAY_LABELS, &mut rng).unwrap();
        for plan in &plans {
            assert_eq!(plan.meal(Category::Breakfast).name, "Oatmeal");
        }
    }
}

#[test]
fn test_generated_meals_are_members_of_filtered_catalog() {
    let catalog = builtin_catalog().unwrap();

    for vegetarian in [true, false] {
        let filtered = filter_by_diet(&catalog, vegetarian);
        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plans = generate_plans(&filtered, &DEFAULT_DAY_LABELS, &mut rng).unwrap();

            assert_eq!(plans.len(), 2);
            assert_eq!(plans[0].label, "Today");
            assert_eq!(plans[1].label, "Tomorrow");

            for plan in &plans {
                for (category, chosen) in plan.meals.iter() {
                    assert!(
                        filtered.items(category).contains(chosen),
                        "{} not eligible for {}",
                        chosen.name,
                        category
                    );
                }
            }
        }
    }
}

#[test]
fn test_generation_reaches_every_eligible_meal() {
    let filtered = filter_by_diet(&builtin_catalog().unwrap(), true);
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..200 {
        let plans = generate_plans(&filtered, &["Today"], &mut rng).unwrap();
        seen.insert(plans[0].meal(Category::Breakfast).name.clone());
    }

    assert_eq!(seen.len(), filtered.items(Category::Breakfast).len());
}

#[test]
fn test_seeded_initial_plans_from_builtin_catalog() {
    let filtered = filter_by_diet(&builtin_catalog().unwrap(), false);
    let plans = seeded_plans(&filtered, &DEFAULT_DAY_LABELS).unwrap();

    assert_eq!(plans[0].meal(Category::Breakfast).name, "Oatmeal with Berries");
    assert_eq!(plans[0].meal(Category::Snacks).name, "Greek Yogurt with Nuts");
    assert_eq!(plans[1].meal(Category::Lunch).name, "Chickpea Curry with Rice");
    assert_eq!(plans[1].meal(Category::Dinner).name, "Lentil and Vegetable Curry");
}

#[test]
fn test_empty_pool_fails_without_partial_plans() {
    let catalog = breakfast_only_scenario().with_category(Category::Dinner, vec![meal("Steak", false)]);
    let filtered = filter_by_diet(&catalog, true);
    let mut rng = StdRng::seed_from_u64(9);

    let err = generate_plans(&filtered, &DEFAULT_DAY_LABELS, &mut rng).unwrap_err();
    assert!(matches!(err, FitError::EmptySelectionPool(Category::Dinner)));

    let err = seeded_plans(&filtered, &DEFAULT_DAY_LABELS).unwrap_err();
    assert!(matches!(err, FitError::EmptySelectionPool(Category::Dinner)));
}

#[test]
fn test_swap_single_eligible_is_deterministic() {
    let catalog = breakfast_only_scenario();
    let plan = seeded_plans(&catalog, &["Tomorrow", "Today"]).unwrap().remove(1);
    assert_eq!(plan.meal(Category::Breakfast).name, "Bacon and Eggs");

    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..10 {
        let swapped = swap_meal(&plan, Category::Breakfast, &catalog, true, &mut rng).unwrap();
        assert_eq!(swapped.meal(Category::Breakfast).name, "Oatmeal");
        assert_eq!(swapped.meal(Category::Lunch), plan.meal(Category::Lunch));
    }
    assert_eq!(plan.meal(Category::Breakfast).name, "Bacon and Eggs");
}

#[test]
fn test_select_then_read_returns_assigned_meal() {
    let catalog = filter_by_diet(&breakfast_only_scenario(), true);
    let plan = seeded_plans(&catalog, &["Today"]).unwrap().remove(0);

    let outside_catalog = meal("Double Cheeseburger", false);
    let updated = select_meal(&plan, Category::Lunch, outside_catalog.clone());
    assert_eq!(updated.meal(Category::Lunch), &outside_catalog);
}
