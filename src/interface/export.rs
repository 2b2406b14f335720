use std::path::Path;

use crate::error::Result;
use crate::models::{DailyPlan, WeightLog};

/// Write weight logs as `date,weight` rows.
pub fn write_weight_csv(logs: &[WeightLog], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["date", "weight_kg"])?;
    for log in logs {
        wtr.write_record([log.date.to_string(), format!("{:.1}", log.weight)])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write plans with one row per day and category.
pub fn write_plans_csv(plans: &[DailyPlan], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "day",
        "meal_type",
        "meal_name",
        "calories",
        "protein",
        "carbs",
        "fat",
    ])?;

    for plan in plans {
        for (category, meal) in plan.meals.iter() {
            wtr.write_record([
                plan.label.clone(),
                category.to_string(),
                meal.name.clone(),
                format!("{:.0}", meal.calories),
                format!("{:.0}", meal.protein),
                format!("{:.0}", meal.carbs),
                format!("{:.0}", meal.fat),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealItem, PlanMeals};
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    #[test]
    fn test_weight_csv() {
        let logs = vec![
            WeightLog::new(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(), 82.04),
            WeightLog::new(NaiveDate::from_ymd_opt(2026, 4, 8).unwrap(), 81.5),
        ];
        let file = NamedTempFile::new().unwrap();
        write_weight_csv(&logs, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "date,weight_kg\n2026-04-01,82.0\n2026-04-08,81.5\n");
    }

    #[test]
    fn test_plans_csv_row_per_category() {
        let meal = |n: &str| MealItem::new(n, 300.0, 10.0, 40.0, 9.0, true);
        let plan = DailyPlan::new(
            "Today",
            PlanMeals {
                breakfast: meal("Oatmeal"),
                lunch: meal("Quinoa Bowl"),
                dinner: meal("Tofu Stir-Fry"),
                snacks: meal("Protein Bar"),
            },
        );
        let file = NamedTempFile::new().unwrap();
        write_plans_csv(&[plan], file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "Today,breakfast,Oatmeal,300,10,40,9");
    }
}
