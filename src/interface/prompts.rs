use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::catalog::MealCatalog;
use crate::error::Result;
use crate::models::{Category, MealItem};
use crate::planner::Suggestions;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_THRESHOLD: f64 = 0.7;

/// Catalog meals ranked by name similarity to `input`, best first.
pub fn fuzzy_candidates<'a>(catalog: &'a MealCatalog, input: &str) -> Vec<(Category, &'a MealItem, f64)> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(Category, &MealItem, f64)> = catalog
        .all_meals()
        .into_iter()
        .map(|(c, m)| (c, m, jaro_winkler(&m.key(), &needle)))
        .filter(|(_, _, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Resolve a typed meal name against the catalog.
///
/// Exact (case-insensitive) names win; otherwise the user confirms or
/// picks among fuzzy matches.
pub fn resolve_meal_name(
    catalog: &MealCatalog,
    input: &str,
) -> Result<Option<(Category, MealItem)>> {
    if let Some((category, meal)) = catalog.find(input) {
        return Ok(Some((category, meal.clone())));
    }

    let candidates = fuzzy_candidates(catalog, input);

    match candidates.len() {
        0 => {
            println!("No matching meal found for '{}'", input.trim());
            Ok(None)
        }
        1 => {
            let (category, meal, _) = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", meal.name))
                .default(true)
                .interact()?;
            Ok(confirm.then(|| (category, meal.clone())))
        }
        _ => {
            let options: Vec<(Category, &MealItem)> = candidates
                .iter()
                .take(5)
                .map(|(c, m, _)| (*c, *m))
                .collect();

            let mut labels: Vec<String> = options
                .iter()
                .map(|(c, m)| format!("{} ({})", m.name, c))
                .collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            Ok(options
                .get(selection)
                .map(|(c, m)| (*c, (*m).clone())))
        }
    }
}

/// Let the user pick one grocery-based suggestion.
pub fn prompt_suggestion(suggestions: &Suggestions) -> Result<Option<(Category, MealItem)>> {
    let options: Vec<(Category, &MealItem)> = suggestions
        .non_empty()
        .flat_map(|(c, meals)| meals.iter().map(move |m| (c, m)))
        .collect();

    if options.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = options
        .iter()
        .map(|(c, m)| format!("{:<10} {} ({:.0} kcal)", c.title(), m.name, m.calories))
        .collect();

    let selection = prompt_pick("Select a meal for today", &labels)?;
    Ok(selection.and_then(|i| options.get(i)).map(|(c, m)| (*c, (*m).clone())))
}

/// Pick one of `labels`; `None` when the user chooses "Cancel".
pub fn prompt_pick(prompt: &str, labels: &[String]) -> Result<Option<usize>> {
    let mut items = labels.to_vec();
    items.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok((selection < labels.len()).then_some(selection))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
