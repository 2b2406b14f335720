pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_plans_csv, write_weight_csv};
pub use prompts::{
    fuzzy_candidates, prompt_pick, prompt_suggestion, prompt_yes_no, resolve_meal_name,
};
pub use render::{
    display_groceries, display_plan, display_plans, display_progress, display_reminder_drafts,
    display_reminders, display_suggestions,
};
