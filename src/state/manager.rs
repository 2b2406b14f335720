use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use crate::catalog::MealCatalog;
use crate::error::{FitError, Result};
use crate::models::{unchecked_names, DailyPlan, GroceryItem, Reminder, WeightLog};
use crate::planner::{filter_by_diet, generate_plans, seeded_plans, DEFAULT_DAY_LABELS};
use crate::progress;
use crate::state::persistence::SessionState;

/// Owns the session state and the edits the CLI makes to it.
///
/// Names and plan labels are matched case-insensitively.
pub struct SessionManager {
    state: SessionState,
}

impl SessionManager {
    pub fn new(state: SessionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn vegetarian(&self) -> bool {
        self.state.vegetarian
    }

    pub fn set_vegetarian(&mut self, vegetarian: bool) {
        self.state.vegetarian = vegetarian;
    }

    pub fn plans(&self) -> &[DailyPlan] {
        &self.state.plans
    }

    /// Replace every plan.
    pub fn set_plans(&mut self, plans: Vec<DailyPlan>) {
        debug!(count = plans.len(), "replacing plans");
        self.state.plans = plans;
    }

    /// Replace every plan with the seeded initial plans for the current diet.
    pub fn seed_plans(&mut self, catalog: &MealCatalog) -> Result<()> {
        let plans = seeded_plans(&filter_by_diet(catalog, self.vegetarian()), &DEFAULT_DAY_LABELS)?;
        self.set_plans(plans);
        Ok(())
    }

    /// Seed the initial plans when none are stored; returns whether it did.
    pub fn ensure_plans(&mut self, catalog: &MealCatalog) -> Result<bool> {
        if !self.state.plans.is_empty() {
            return Ok(false);
        }
        self.seed_plans(catalog)?;
        Ok(true)
    }

    /// Replace every plan with random draws for the current diet.
    pub fn regenerate_plans<R: Rng + ?Sized>(
        &mut self,
        catalog: &MealCatalog,
        rng: &mut R,
    ) -> Result<()> {
        let eligible = filter_by_diet(catalog, self.vegetarian());
        let plans = generate_plans(&eligible, &DEFAULT_DAY_LABELS, rng)?;
        self.set_plans(plans);
        Ok(())
    }

    /// Store a new dietary preference and regenerate the plans for it.
    ///
    /// The preference is kept even when regeneration fails; the stored
    /// plans are then left untouched and the error is returned.
    pub fn change_diet<R: Rng + ?Sized>(
        &mut self,
        vegetarian: bool,
        catalog: &MealCatalog,
        rng: &mut R,
    ) -> Result<()> {
        self.set_vegetarian(vegetarian);
        self.regenerate_plans(catalog, rng)
    }

    pub fn plan(&self, label: &str) -> Result<&DailyPlan> {
        self.state
            .plans
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| FitError::PlanNotFound(label.to_string()))
    }

    /// Replace the stored plan carrying the same label.
    pub fn replace_plan(&mut self, plan: DailyPlan) -> Result<()> {
        let slot = self
            .state
            .plans
            .iter_mut()
            .find(|p| p.label.eq_ignore_ascii_case(&plan.label))
            .ok_or_else(|| FitError::PlanNotFound(plan.label.clone()))?;
        *slot = plan;
        Ok(())
    }

    pub fn groceries(&self) -> &[GroceryItem] {
        &self.state.groceries
    }

    fn grocery_index(&self, name: &str) -> Result<usize> {
        let key = name.trim().to_lowercase();
        self.state
            .groceries
            .iter()
            .position(|item| item.key() == key)
            .ok_or_else(|| FitError::GroceryNotFound(name.to_string()))
    }

    /// Add an unchecked item. Re-adding a checked item unchecks it.
    pub fn add_grocery(&mut self, name: &str) -> Result<&GroceryItem> {
        if name.trim().is_empty() {
            return Err(FitError::InvalidInput("grocery name is empty".to_string()));
        }

        let idx = match self.grocery_index(name) {
            Ok(idx) => {
                let item = &mut self.state.groceries[idx];
                if !item.checked {
                    return Err(FitError::InvalidInput(format!(
                        "'{}' is already on the list",
                        item.name
                    )));
                }
                item.checked = false;
                idx
            }
            Err(_) => {
                self.state.groceries.push(GroceryItem::new(name));
                self.state.groceries.len() - 1
            }
        };

        info!(item = %self.state.groceries[idx].name, "grocery added");
        Ok(&self.state.groceries[idx])
    }

    /// Flip the checked flag; returns the new value.
    pub fn toggle_grocery(&mut self, name: &str) -> Result<bool> {
        let idx = self.grocery_index(name)?;
        let item = &mut self.state.groceries[idx];
        item.checked = !item.checked;
        Ok(item.checked)
    }

    pub fn remove_grocery(&mut self, name: &str) -> Result<GroceryItem> {
        let idx = self.grocery_index(name)?;
        Ok(self.state.groceries.remove(idx))
    }

    /// Names still to be bought; these drive meal suggestions.
    pub fn unchecked_grocery_names(&self) -> Vec<&str> {
        unchecked_names(&self.state.groceries)
    }

    pub fn weight_logs(&self) -> &[WeightLog] {
        &self.state.weight_logs
    }

    pub fn log_weight(&mut self, date: NaiveDate, weight: f64) -> Result<()> {
        let entry = WeightLog::new(date, weight);
        if !entry.is_valid() {
            return Err(FitError::InvalidInput(format!(
                "weight must be a positive number, got {}",
                weight
            )));
        }
        progress::record_weight(&mut self.state.weight_logs, entry);
        Ok(())
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.state.reminders
    }

    pub fn add_reminder(&mut self, reminder: Reminder) -> &Reminder {
        info!(title = %reminder.title, "reminder added");
        self.state.reminders.push(reminder);
        &self.state.reminders[self.state.reminders.len() - 1]
    }

    /// Remove by title, or failing that by a unique id prefix.
    pub fn remove_reminder(&mut self, key: &str) -> Result<Reminder> {
        let key = key.trim();
        if key.is_empty() {
            return Err(FitError::ReminderNotFound(key.to_string()));
        }

        let idx = match self
            .state
            .reminders
            .iter()
            .position(|r| r.title.eq_ignore_ascii_case(key))
        {
            Some(idx) => idx,
            None => self.reminder_id_index(key)?,
        };

        let removed = self.state.reminders.remove(idx);
        info!(title = %removed.title, "reminder removed");
        Ok(removed)
    }

    fn reminder_id_index(&self, prefix: &str) -> Result<usize> {
        let prefix = prefix.to_lowercase();
        let mut hits = self
            .state
            .reminders
            .iter()
            .enumerate()
            .filter(|(_, r)| r.id.to_string().starts_with(&prefix))
            .map(|(idx, _)| idx);

        match (hits.next(), hits.next()) {
            (Some(idx), None) => Ok(idx),
            (Some(_), Some(_)) => Err(FitError::InvalidInput(format!(
                "'{}' matches more than one reminder id",
                prefix
            ))),
            (None, _) => Err(FitError::ReminderNotFound(prefix)),
        }
    }
}
