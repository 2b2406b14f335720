use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A body-weight measurement in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLog {
    pub date: NaiveDate,
    pub weight: f64,
}

impl WeightLog {
    pub fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }

    pub fn is_valid(&self) -> bool {
        self.weight.is_finite() && self.weight > 0.0
    }
}
