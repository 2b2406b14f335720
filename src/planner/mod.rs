pub mod constants;
pub mod filter;
pub mod selection;
pub mod suggestions;

pub use constants::*;
pub use filter::{eligible_meals, filter_by_diet, is_eligible};
pub use selection::{
    generate_plans, pick_positional, pick_random, seeded_plans, select_meal, swap_meal,
};
pub use suggestions::{suggest_from_groceries, Suggestions};
