pub mod calculator;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod progress;
pub mod reminders;
pub mod state;

pub use catalog::MealCatalog;
pub use error::{FitError, Result};
pub use models::{Category, DailyPlan, MealItem};
