use serde::{Deserialize, Serialize};

use crate::models::{Category, MealItem, NutritionTotals};

/// One meal per category. Every slot is always filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMeals {
    pub breakfast: MealItem,
    pub lunch: MealItem,
    pub dinner: MealItem,
    pub snacks: MealItem,
}

impl PlanMeals {
    pub fn get(&self, category: Category) -> &MealItem {
        match category {
            Category::Breakfast => &self.breakfast,
            Category::Lunch => &self.lunch,
            Category::Dinner => &self.dinner,
            Category::Snacks => &self.snacks,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut MealItem {
        match category {
            Category::Breakfast => &mut self.breakfast,
            Category::Lunch => &mut self.lunch,
            Category::Dinner => &mut self.dinner,
            Category::Snacks => &mut self.snacks,
        }
    }

    /// Meals in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &MealItem)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// A labelled day ("Today", "Tomorrow", or a date) with its meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    #[serde(rename = "date")]
    pub label: String,

    pub meals: PlanMeals,
}

impl DailyPlan {
    pub fn new(label: impl Into<String>, meals: PlanMeals) -> Self {
        Self {
            label: label.into(),
            meals,
        }
    }

    pub fn meal(&self, category: Category) -> &MealItem {
        self.meals.get(category)
    }

    /// Copy of this plan with one category replaced.
    pub fn with_meal(&self, category: Category, meal: MealItem) -> Self {
        let mut plan = self.clone();
        *plan.meals.get_mut(category) = meal;
        plan
    }

    pub fn totals(&self) -> NutritionTotals {
        self.meals.iter().map(|(_, meal)| meal).collect()
    }
}
