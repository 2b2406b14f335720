use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FitError, Result};

pub const DEFAULT_REMINDER_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        })
    }
}

impl FromStr for Priority {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(FitError::InvalidInput(format!("unknown priority '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
            Recurrence::Yearly => "yearly",
        })
    }
}

impl FromStr for Recurrence {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            "yearly" => Ok(Recurrence::Yearly),
            other => Err(FitError::InvalidInput(format!("unknown recurrence '{}'", other))),
        }
    }
}

/// A stored reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub title: String,
    /// Local time of day, `HH:MM`.
    pub time: String,
    pub days: Vec<Weekday>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

fn default_category() -> String {
    DEFAULT_REMINDER_CATEGORY.to_string()
}

impl Reminder {
    pub fn occurs_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Days joined for display, e.g. `Mon, Wed, Fri`.
    pub fn days_string(&self) -> String {
        self.days
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A reminder being created; missing fields take the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderDraft {
    pub title: String,
    pub time: String,
    pub days: Vec<Weekday>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub recurrence: Option<Recurrence>,
    pub location: Option<String>,
}

impl ReminderDraft {
    /// Validate and fill defaults, assigning a fresh id.
    pub fn into_reminder(self) -> Result<Reminder> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(FitError::InvalidInput("reminder title is required".to_string()));
        }

        let time = self.time.trim().to_string();
        NaiveTime::parse_from_str(&time, "%H:%M").map_err(|_| {
            FitError::InvalidInput(format!("reminder time '{}' is not HH:MM", time))
        })?;

        if self.days.is_empty() {
            return Err(FitError::InvalidInput(
                "reminder needs at least one day".to_string(),
            ));
        }

        let mut days = Vec::with_capacity(self.days.len());
        for day in self.days {
            if !days.contains(&day) {
                days.push(day);
            }
        }

        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(default_category);

        Ok(Reminder {
            id: Uuid::new_v4(),
            title,
            time,
            days,
            priority: self.priority.unwrap_or_default(),
            category,
            recurrence: self.recurrence.unwrap_or_default(),
            location: self.location.filter(|l| !l.trim().is_empty()),
        })
    }
}

/// Parse a comma-separated day list such as `Mon,Wed,Fri`.
pub fn parse_days(s: &str) -> Result<Vec<Weekday>> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<Weekday>()
                .map_err(|_| FitError::InvalidInput(format!("unknown day '{}'", part)))
        })
        .collect()
}
