use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// fit_planner — meal plans, grocery-based suggestions, calories, progress and reminders.
#[derive(Parser, Debug)]
#[command(name = "fit_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the session state JSON file.
    #[arg(short, long, global = true, default_value = "fit_state.json")]
    pub file: String,

    /// Meal catalog JSON file. Uses the built-in catalog when omitted.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Seed for reproducible random plans and swaps.
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or change the meal plans.
    Plan {
        #[command(subcommand)]
        action: Option<PlanAction>,
    },

    /// Suggest meals from the unchecked grocery items.
    Suggest {
        /// Pick one suggestion for today's plan.
        #[arg(long)]
        pick: bool,
    },

    /// Show or set the dietary preference. Changing it regenerates the plans.
    Diet {
        /// Vegetarian meals only.
        #[arg(long, conflicts_with = "any")]
        vegetarian: bool,

        /// No dietary restriction.
        #[arg(long)]
        any: bool,
    },

    /// Manage the grocery list.
    Grocery {
        #[command(subcommand)]
        action: GroceryAction,
    },

    /// Estimate daily calorie needs (Harris-Benedict).
    Calories {
        /// Age in years.
        #[arg(long)]
        age: f64,

        /// Weight in kilograms.
        #[arg(long)]
        weight: f64,

        /// Height in centimetres.
        #[arg(long)]
        height: f64,

        /// male or female.
        #[arg(long, default_value = "male")]
        sex: String,

        /// sedentary, light, moderate, active or very-active.
        #[arg(long, default_value = "moderate")]
        activity: String,
    },

    /// Log and review body weight.
    Weight {
        #[command(subcommand)]
        action: WeightAction,
    },

    /// Manage reminders.
    Reminders {
        #[command(subcommand)]
        action: ReminderAction,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { action: None }
    }
}

#[derive(Subcommand, Debug, Default)]
pub enum PlanAction {
    /// Show the current plans (seeding them on first use).
    #[default]
    Show,

    /// Reset to the deterministic initial plans.
    Seed,

    /// Generate new random plans for today and tomorrow.
    Generate,

    /// Swap one meal for a random alternative.
    Swap {
        /// Day label, e.g. Today or Tomorrow.
        day: String,

        /// breakfast, lunch, dinner or snacks.
        category: String,
    },

    /// Put a specific catalog meal into a plan.
    Select {
        /// breakfast, lunch, dinner or snacks.
        category: String,

        /// Meal name (fuzzy matched against the catalog).
        #[arg(required = true, num_args = 1..)]
        meal: Vec<String>,

        /// Day label.
        #[arg(long, default_value = "Today")]
        day: String,
    },

    /// Export the plans to CSV.
    Export {
        #[arg(default_value = "meal_plans.csv")]
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum GroceryAction {
    /// Add one or more items.
    Add {
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },

    /// Check or uncheck an item.
    Toggle { name: String },

    /// Remove an item.
    Remove { name: String },

    /// Show the list.
    List,
}

#[derive(Subcommand, Debug)]
pub enum WeightAction {
    /// Log a weight in kilograms.
    Add {
        weight: f64,

        /// Date of the measurement (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the log and the overall change.
    Show,

    /// Export the log to CSV.
    Export {
        #[arg(default_value = "weight_logs.csv")]
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReminderAction {
    /// List reminders, optionally filtered.
    List {
        /// Case-insensitive text in the title.
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// low, medium or high.
        #[arg(long)]
        priority: Option<String>,

        /// all, today or high.
        #[arg(long, default_value = "all")]
        view: String,
    },

    /// Add a reminder.
    Add {
        title: String,

        /// Time of day, HH:MM.
        #[arg(long, default_value = "12:00")]
        time: String,

        /// Comma-separated days, e.g. Mon,Wed,Fri.
        #[arg(long, default_value = "Mon")]
        days: String,

        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// daily, weekly, monthly or yearly.
        #[arg(long)]
        recurrence: Option<String>,

        #[arg(long)]
        location: Option<String>,
    },

    /// Remove a reminder by id prefix or title.
    Remove { key: String },

    /// Show built-in suggestions not yet added.
    Suggested {
        /// Pick one to add.
        #[arg(long)]
        add: bool,
    },
}
