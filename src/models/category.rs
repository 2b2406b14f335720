use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FitError;

/// Meal slot in a daily plan. Variant order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
            Category::Snacks => "snacks",
        }
    }

    /// Capitalized label for headings.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Category::Breakfast),
            "lunch" => Ok(Category::Lunch),
            "dinner" => Ok(Category::Dinner),
            "snacks" => Ok(Category::Snacks),
            _ => Err(FitError::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Lunch".parse::<Category>().unwrap(), Category::Lunch);
        assert_eq!(" snacks ".parse::<Category>().unwrap(), Category::Snacks);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "brunch".parse::<Category>().unwrap_err();
        assert!(matches!(err, FitError::InvalidCategory(ref k) if k == "brunch"));
    }

    #[test]
    fn test_display_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_order_matches_all() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }
}
