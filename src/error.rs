use thiserror::Error;

use crate::models::Category;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("No eligible meals for {0}")]
    EmptySelectionPool(Category),

    #[error("Invalid meal category: {0}")]
    InvalidCategory(String),

    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Grocery item not found: {0}")]
    GroceryNotFound(String),

    #[error("Reminder not found: {0}")]
    ReminderNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FitError>;
