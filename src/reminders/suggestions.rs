use chrono::Weekday;

use crate::models::{Priority, Recurrence, Reminder, ReminderDraft};

const EVERY_DAY: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Built-in reminder suggestions offered to every user.
pub fn suggested_reminders() -> Vec<ReminderDraft> {
    vec![
        ReminderDraft {
            title: "Morning Workout".to_string(),
            time: "07:00".to_string(),
            days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
            priority: Some(Priority::Medium),
            category: Some("Fitness".to_string()),
            recurrence: Some(Recurrence::Weekly),
            location: None,
        },
        ReminderDraft {
            title: "Take Vitamins".to_string(),
            time: "08:30".to_string(),
            days: EVERY_DAY.to_vec(),
            priority: Some(Priority::High),
            category: Some("Health".to_string()),
            recurrence: Some(Recurrence::Daily),
            location: None,
        },
        ReminderDraft {
            title: "Team Meeting".to_string(),
            time: "10:00".to_string(),
            days: vec![Weekday::Mon],
            priority: Some(Priority::High),
            category: Some("Work".to_string()),
            recurrence: Some(Recurrence::Weekly),
            location: None,
        },
    ]
}

/// Suggestions whose title is not already taken (case-insensitive).
pub fn pending_suggestions(existing: &[Reminder]) -> Vec<ReminderDraft> {
    suggested_reminders()
        .into_iter()
        .filter(|s| {
            !existing
                .iter()
                .any(|r| r.title.eq_ignore_ascii_case(&s.title))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_are_valid() {
        for draft in suggested_reminders() {
            assert!(draft.into_reminder().is_ok());
        }
    }

    #[test]
    fn test_pending_hides_added() {
        let added = suggested_reminders().remove(1).into_reminder().unwrap();
        let pending = pending_suggestions(&[added]);
        let titles: Vec<&str> = pending.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Morning Workout", "Team Meeting"]);
    }
}
