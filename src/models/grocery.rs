use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entry on the grocery list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: Uuid,

    pub name: String,

    #[serde(default)]
    pub checked: bool,
}

impl GroceryItem {
    /// New unchecked item; the name is trimmed.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            checked: false,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Names of the items still to be bought, in list order.
pub fn unchecked_names(items: &[GroceryItem]) -> Vec<&str> {
    items
        .iter()
        .filter(|item| !item.checked)
        .map(|item| item.name.as_str())
        .collect()
}
