use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{DailyPlan, GroceryItem, Reminder, WeightLog};

/// Everything the CLI keeps between runs for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Dietary preference: vegetarian-only when true.
    #[serde(default)]
    pub vegetarian: bool,

    #[serde(default)]
    pub plans: Vec<DailyPlan>,

    #[serde(default)]
    pub groceries: Vec<GroceryItem>,

    #[serde(default)]
    pub weight_logs: Vec<WeightLog>,

    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

/// Load session state from a JSON file.
///
/// Weight logs are re-sorted by date.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<SessionState> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let mut state: SessionState = serde_json::from_str(&content)?;
    state.weight_logs.sort_by_key(|log| log.date);

    debug!(
        path = %path.display(),
        plans = state.plans.len(),
        groceries = state.groceries.len(),
        reminders = state.reminders.len(),
        "loaded session state"
    );
    Ok(state)
}

/// Save session state as pretty JSON.
pub fn save_state<P: AsRef<Path>>(path: P, state: &SessionState) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved session state");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_fields_default() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"vegetarian": true}"#).unwrap();

        let state = load_state(file.path()).unwrap();
        assert!(state.vegetarian);
        assert!(state.plans.is_empty());
        assert!(state.groceries.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let mut state = SessionState::default();
        state.groceries.push(GroceryItem::new("Chicken"));

        let file = NamedTempFile::new().unwrap();
        save_state(file.path(), &state).unwrap();

        let reloaded = load_state(file.path()).unwrap();
        assert_eq!(reloaded, state);
    }

    #[test]
    fn test_weight_logs_sorted_on_load() {
        let json = r#"{"weight_logs": [
            {"date": "2026-02-10", "weight": 80.0},
            {"date": "2026-02-01", "weight": 82.0}
        ]}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let state = load_state(file.path()).unwrap();
        assert_eq!(state.weight_logs[0].weight, 82.0);
    }
}
