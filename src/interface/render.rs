use crate::models::{DailyPlan, GroceryItem, Reminder, ReminderDraft, WeightLog};
use crate::planner::Suggestions;
use crate::progress::ProgressSummary;

/// Display one day's plan as a small table.
pub fn display_plan(plan: &DailyPlan) {
    println!();
    println!("=== {} ===", plan.label);
    println!();

    let width = plan
        .meals
        .iter()
        .map(|(_, meal)| meal.name.len())
        .max()
        .unwrap_or(10);

    for (category, meal) in plan.meals.iter() {
        let tag = if meal.is_vegetarian { "  [veg]" } else { "" };
        println!(
            "  {:<10} {:<width$}  {}{}",
            category.title(),
            meal.name,
            meal.macro_string(),
            tag,
            width = width
        );
    }

    let totals = plan.totals();
    println!();
    println!(
        "  Total: {:.0} kcal | P:{:.0}g C:{:.0}g F:{:.0}g",
        totals.calories, totals.protein, totals.carbs, totals.fat
    );
}

/// Display every stored plan.
pub fn display_plans(plans: &[DailyPlan], vegetarian: bool) {
    if plans.is_empty() {
        println!("No meal plan yet. Run 'plan seed' or 'plan generate'.");
        return;
    }

    let mode = if vegetarian { "vegetarian" } else { "unrestricted" };
    println!("Diet: {}", mode);

    for plan in plans {
        display_plan(plan);
    }
    println!();
}

/// Display grocery-based suggestions, skipping categories without matches.
pub fn display_suggestions(suggestions: &Suggestions, groceries: &[&str]) {
    if groceries.is_empty() {
        println!("No grocery items. Add items to your grocery list to see meal suggestions.");
        return;
    }

    println!();
    println!("Your groceries: {}", groceries.join(", "));

    if suggestions.is_empty() {
        println!("No meals match your groceries.");
        return;
    }

    println!();
    println!("=== Suggested Meals from Your Groceries ===");
    for (category, meals) in suggestions.non_empty() {
        println!();
        println!("{} ({} suggestions)", category.title(), meals.len());
        for meal in meals {
            println!("  - {} ({:.0} kcal, {:.0}g protein)", meal.name, meal.calories, meal.protein);
        }
    }
    println!();
}

pub fn display_groceries(items: &[GroceryItem]) {
    if items.is_empty() {
        println!("Grocery list: (empty)");
        return;
    }

    println!();
    println!("=== Grocery List ({} items) ===", items.len());
    for item in items {
        let mark = if item.checked { "x" } else { " " };
        println!("  [{}] {}", mark, item.name);
    }
    println!();
}

pub fn display_progress(summary: Option<&ProgressSummary>, logs: &[WeightLog]) {
    let Some(summary) = summary else {
        println!("No weight logged yet.");
        return;
    };

    println!();
    println!("=== Weight Progress ===");
    println!();
    for log in logs {
        println!("  {}  {:>6.1} kg", log.date.format("%m/%d"), log.weight);
    }

    let sign = if summary.change > 0.0 { "+" } else { "" };
    println!();
    println!("Starting weight: {:.1} kg ({})", summary.start, summary.first_date);
    println!("Current weight:  {:.1} kg ({})", summary.current, summary.last_date);
    println!("Change:          {}{:.1} kg", sign, summary.change);
    println!();
}

/// Display reminders, then every category in use as a filter hint.
pub fn display_reminders(reminders: &[&Reminder], categories: &[&str]) {
    if reminders.is_empty() {
        println!("No reminders found.");
        return;
    }

    println!();
    for reminder in reminders {
        let id = reminder.id.to_string();
        println!(
            "  {}  {} @ {} | {} | {} | {} | {}",
            &id[..8],
            reminder.title,
            reminder.time,
            reminder.days_string(),
            reminder.priority,
            reminder.category,
            reminder.recurrence
        );
        if let Some(location) = &reminder.location {
            println!("            at {}", location);
        }
    }
    println!();
    if !categories.is_empty() {
        println!("Categories: {}", categories.join(", "));
    }
}

pub fn display_reminder_drafts(drafts: &[ReminderDraft]) {
    if drafts.is_empty() {
        println!("No new suggestions.");
        return;
    }

    println!();
    println!("=== Suggested Reminders ===");
    for draft in drafts {
        let days: Vec<String> = draft.days.iter().map(|d| d.to_string()).collect();
        println!("  {} - {} ({})", draft.title, draft.time, days.join(", "));
    }
    println!();
}
