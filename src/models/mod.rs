mod category;
mod grocery;
mod meal;
mod plan;
mod reminder;
mod weight;

pub use category::Category;
pub use grocery::{unchecked_names, GroceryItem};
pub use meal::{MealItem, NutritionTotals};
pub use plan::{DailyPlan, PlanMeals};
pub use reminder::{
    parse_days, Priority, Recurrence, Reminder, ReminderDraft, DEFAULT_REMINDER_CATEGORY,
};
pub use weight::WeightLog;
