use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::{FitError, Result};
use crate::models::{Priority, Reminder};

/// Which reminder list is being viewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReminderView {
    #[default]
    All,
    /// Reminders scheduled on the current weekday.
    Today,
    /// High-priority reminders only.
    High,
}

impl fmt::Display for ReminderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReminderView::All => "all",
            ReminderView::Today => "today",
            ReminderView::High => "high",
        })
    }
}

impl FromStr for ReminderView {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ReminderView::All),
            "today" => Ok(ReminderView::Today),
            "high" => Ok(ReminderView::High),
            other => Err(FitError::InvalidInput(format!("unknown view '{}'", other))),
        }
    }
}

/// Criteria applied to the reminder list. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub view: ReminderView,
}

impl ReminderFilter {
    pub fn matches(&self, reminder: &Reminder, today: Weekday) -> bool {
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            if !reminder
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &reminder.category != category {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if reminder.priority != priority {
                return false;
            }
        }

        match self.view {
            ReminderView::All => true,
            ReminderView::Today => reminder.occurs_on(today),
            ReminderView::High => reminder.priority == Priority::High,
        }
    }
}

/// Reminders passing the filter, in their original order.
pub fn apply_filters<'a>(
    reminders: &'a [Reminder],
    filter: &ReminderFilter,
    today: Weekday,
) -> Vec<&'a Reminder> {
    reminders
        .iter()
        .filter(|r| filter.matches(r, today))
        .collect()
}

/// Distinct categories in first-seen order.
pub fn unique_categories(reminders: &[Reminder]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for reminder in reminders {
        let category = reminder.category.as_str();
        if !category.is_empty() && !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}
