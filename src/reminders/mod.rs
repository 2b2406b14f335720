mod filter;
mod suggestions;

pub use filter::{apply_filters, unique_categories, ReminderFilter, ReminderView};
pub use suggestions::{pending_suggestions, suggested_reminders};
