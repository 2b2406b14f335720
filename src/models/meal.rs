use serde::{Deserialize, Serialize};

/// A catalog meal with its macros.
///
/// Catalog entries are immutable; identity is the position in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub name: String,

    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fat: f64,

    #[serde(rename = "isVegetarian")]
    pub is_vegetarian: bool,
}

impl MealItem {
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        is_vegetarian: bool,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            carbs,
            fat,
            is_vegetarian,
        }
    }

    /// Basic validation: non-blank name and finite, non-negative macros.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && [self.calories, self.protein, self.carbs, self.fat]
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Lowercase name used for matching.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Case-insensitive substring test against a lowercased needle.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.key().contains(needle_lower)
    }

    /// One-line macro summary for display.
    pub fn macro_string(&self) -> String {
        format!(
            "{:.0} kcal | P:{:.0}g C:{:.0}g F:{:.0}g",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

/// Summed macros over several meals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionTotals {
    pub fn add(&mut self, meal: &MealItem) {
        self.calories += meal.calories;
        self.protein += meal.protein;
        self.carbs += meal.carbs;
        self.fat += meal.fat;
    }
}

impl<'a> FromIterator<&'a MealItem> for NutritionTotals {
    fn from_iter<I: IntoIterator<Item = &'a MealItem>>(iter: I) -> Self {
        let mut totals = NutritionTotals::default();
        for meal in iter {
            totals.add(meal);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> MealItem {
        MealItem::new("Bacon and Eggs", 450.0, 28.0, 20.0, 18.0, false)
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_meal().is_valid());

        let mut negative = sample_meal();
        negative.fat = -1.0;
        assert!(!negative.is_valid());

        let mut blank = sample_meal();
        blank.name = "   ".to_string();
        assert!(!blank.is_valid());

        let mut nan = sample_meal();
        nan.calories = f64::NAN;
        assert!(!nan.is_valid());
    }

    #[test]
    fn test_name_contains_ignores_case() {
        let meal = sample_meal();
        assert!(meal.name_contains("egg"));
        assert!(meal.name_contains("bacon and"));
        assert!(!meal.name_contains("Egg"));
    }

    #[test]
    fn test_serde_uses_camel_case_flag() {
        let json = serde_json::to_value(sample_meal()).unwrap();
        assert_eq!(json["isVegetarian"], serde_json::json!(false));
        assert!(json.get("is_vegetarian").is_none());
    }

    #[test]
    fn test_totals() {
        let a = sample_meal();
        let b = MealItem::new("Oatmeal", 350.0, 12.0, 55.0, 8.0, true);
        let totals: NutritionTotals = [&a, &b].into_iter().collect();
        assert_eq!(totals.calories, 800.0);
        assert_eq!(totals.protein, 40.0);
        assert_eq!(totals.carbs, 75.0);
        assert_eq!(totals.fat, 26.0);
    }
}
