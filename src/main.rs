use std::path::Path;

use chrono::{Datelike, Local};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use fit_planner_rs::calculator::{daily_calories, CalorieInput};
use fit_planner_rs::catalog::{builtin_catalog, load_catalog, MealCatalog};
use fit_planner_rs::cli::{
    Cli, Command, GroceryAction, PlanAction, ReminderAction, WeightAction,
};
use fit_planner_rs::error::Result;
use fit_planner_rs::interface::{
    display_groceries, display_plan, display_plans, display_progress, display_reminder_drafts,
    display_reminders, display_suggestions, prompt_pick, prompt_suggestion, prompt_yes_no,
    resolve_meal_name,
    write_plans_csv, write_weight_csv,
};
use fit_planner_rs::models::{parse_days, Category, ReminderDraft};
use fit_planner_rs::planner::{select_meal, suggest_from_groceries, swap_meal, TODAY_LABEL};
use fit_planner_rs::progress::summarize;
use fit_planner_rs::reminders::{
    apply_filters, pending_suggestions, unique_categories, ReminderFilter,
};
use fit_planner_rs::state::{load_state, save_state, SessionManager, SessionState};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let path = Path::new(&cli.file);

    let mut ctx = Context {
        catalog: open_catalog(cli.catalog.as_deref())?,
        manager: SessionManager::new(open_state(path)?),
        rng: match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        },
    };

    let dirty = match command {
        Command::Plan { action } => cmd_plan(&mut ctx, action.unwrap_or_default())?,
        Command::Suggest { pick } => cmd_suggest(&mut ctx, pick)?,
        Command::Diet { vegetarian, any } => cmd_diet(&mut ctx, vegetarian, any)?,
        Command::Grocery { action } => cmd_grocery(&mut ctx, action)?,
        Command::Calories {
            age,
            weight,
            height,
            sex,
            activity,
        } => cmd_calories(age, weight, height, &sex, &activity)?,
        Command::Weight { action } => cmd_weight(&mut ctx, action)?,
        Command::Reminders { action } => cmd_reminders(&mut ctx, action)?,
    };

    if dirty {
        save_state(path, ctx.manager.state())?;
    }
    Ok(())
}

/// Values shared by every command.
struct Context {
    catalog: MealCatalog,
    manager: SessionManager,
    rng: StdRng,
}

impl Context {
    fn seed_plans(&mut self) -> Result<()> {
        self.manager.seed_plans(&self.catalog)
    }

    /// Seed the initial plans on a fresh session; returns whether it did.
    fn ensure_plans(&mut self) -> Result<bool> {
        self.manager.ensure_plans(&self.catalog)
    }

    fn regenerate_plans(&mut self) -> Result<()> {
        self.manager.regenerate_plans(&self.catalog, &mut self.rng)
    }
}

fn open_catalog(path: Option<&Path>) -> Result<MealCatalog> {
    let catalog = match path {
        Some(path) => {
            info!(path = %path.display(), "loading meal catalog");
            load_catalog(path)?
        }
        None => builtin_catalog()?,
    };
    debug!(meals = catalog.len(), "catalog ready");
    Ok(catalog)
}

fn open_state(path: &Path) -> Result<SessionState> {
    if path.exists() {
        load_state(path)
    } else {
        info!(path = %path.display(), "no session file yet, starting fresh");
        Ok(SessionState::default())
    }
}

/// Returns whether the session state changed.
fn cmd_plan(ctx: &mut Context, action: PlanAction) -> Result<bool> {
    match action {
        PlanAction::Show => {
            let seeded = ctx.ensure_plans()?;
            display_plans(ctx.manager.plans(), ctx.manager.vegetarian());
            Ok(seeded)
        }
        PlanAction::Seed => {
            if !ctx.manager.plans().is_empty()
                && !prompt_yes_no("Replace the current plans with the initial plans?", true)?
            {
                return Ok(false);
            }
            ctx.seed_plans()?;
            display_plans(ctx.manager.plans(), ctx.manager.vegetarian());
            Ok(true)
        }
        PlanAction::Generate => {
            ctx.regenerate_plans()?;
            let mode = if ctx.manager.vegetarian() { "vegetarian " } else { "" };
            println!("Your new {}meal plan has been created.", mode);
            display_plans(ctx.manager.plans(), ctx.manager.vegetarian());
            Ok(true)
        }
        PlanAction::Swap { day, category } => {
            let category: Category = category.parse()?;
            ctx.ensure_plans()?;
            let plan = ctx.manager.plan(&day)?;
            let swapped = swap_meal(
                plan,
                category,
                &ctx.catalog,
                ctx.manager.vegetarian(),
                &mut ctx.rng,
            )?;
            println!(
                "Swapped {} to {}",
                category,
                swapped.meal(category).name
            );
            display_plan(&swapped);
            ctx.manager.replace_plan(swapped)?;
            Ok(true)
        }
        PlanAction::Select {
            category,
            meal,
            day,
        } => {
            let category: Category = category.parse()?;
            let name = meal.join(" ");
            let Some((_, meal)) = resolve_meal_name(&ctx.catalog, &name)? else {
                return Ok(false);
            };

            ctx.ensure_plans()?;
            let updated = select_meal(ctx.manager.plan(&day)?, category, meal);
            println!(
                "Added {} to your {} plan",
                updated.meal(category).name,
                category
            );
            ctx.manager.replace_plan(updated)?;
            Ok(true)
        }
        PlanAction::Export { path } => {
            if ctx.manager.plans().is_empty() {
                println!("No meal plan to export.");
                return Ok(false);
            }
            write_plans_csv(ctx.manager.plans(), &path)?;
            println!("Plans written to {}", path.display());
            Ok(false)
        }
    }
}

fn cmd_suggest(ctx: &mut Context, pick: bool) -> Result<bool> {
    let groceries = ctx.manager.unchecked_grocery_names();
    let suggestions = suggest_from_groceries(&groceries, &ctx.catalog);
    display_suggestions(&suggestions, &groceries);

    if !pick || suggestions.is_empty() {
        return Ok(false);
    }

    let Some((category, meal)) = prompt_suggestion(&suggestions)? else {
        return Ok(false);
    };

    ctx.ensure_plans()?;
    let updated = select_meal(ctx.manager.plan(TODAY_LABEL)?, category, meal);
    println!(
        "Added {} to your {} plan",
        updated.meal(category).name,
        category
    );
    ctx.manager.replace_plan(updated)?;
    Ok(true)
}

fn cmd_diet(ctx: &mut Context, vegetarian: bool, any: bool) -> Result<bool> {
    if !vegetarian && !any {
        let mode = if ctx.manager.vegetarian() { "vegetarian" } else { "unrestricted" };
        println!("Diet: {}", mode);
        return Ok(false);
    }

    if ctx.manager.vegetarian() == vegetarian {
        println!("Diet unchanged.");
        return Ok(false);
    }

    if let Err(e) = ctx.manager.change_diet(vegetarian, &ctx.catalog, &mut ctx.rng) {
        warn!(error = %e, "could not regenerate plans for new diet");
        println!("Diet updated, but plans were kept: {}", e);
        return Ok(true);
    }

    let mode = if vegetarian { "vegetarian" } else { "unrestricted" };
    println!("Diet set to {}. Plans regenerated.", mode);
    display_plans(ctx.manager.plans(), vegetarian);
    Ok(true)
}

fn cmd_grocery(ctx: &mut Context, action: GroceryAction) -> Result<bool> {
    match action {
        GroceryAction::Add { names } => {
            for name in &names {
                let item = ctx.manager.add_grocery(name)?;
                println!("Added: {}", item.name);
            }
            Ok(true)
        }
        GroceryAction::Toggle { name } => {
            let checked = ctx.manager.toggle_grocery(&name)?;
            let state = if checked { "checked" } else { "unchecked" };
            println!("{} {}", name.trim(), state);
            Ok(true)
        }
        GroceryAction::Remove { name } => {
            let removed = ctx.manager.remove_grocery(&name)?;
            println!("Removed: {}", removed.name);
            Ok(true)
        }
        GroceryAction::List => {
            display_groceries(ctx.manager.groceries());
            Ok(false)
        }
    }
}

fn cmd_calories(age: f64, weight: f64, height: f64, sex: &str, activity: &str) -> Result<bool> {
    let input = CalorieInput {
        age,
        weight_kg: weight,
        height_cm: height,
        sex: sex.parse()?,
        activity: activity.parse()?,
    };

    let total = daily_calories(&input)?;
    println!("Your estimated daily calorie needs: {} kcal", total);
    Ok(false)
}

fn cmd_weight(ctx: &mut Context, action: WeightAction) -> Result<bool> {
    match action {
        WeightAction::Add { weight, date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            ctx.manager.log_weight(date, weight)?;
            println!("Logged {:.1} kg for {}", weight, date);
            Ok(true)
        }
        WeightAction::Show => {
            let logs = ctx.manager.weight_logs();
            display_progress(summarize(logs).as_ref(), logs);
            Ok(false)
        }
        WeightAction::Export { path } => {
            write_weight_csv(ctx.manager.weight_logs(), &path)?;
            println!("Weight log written to {}", path.display());
            Ok(false)
        }
    }
}

fn cmd_reminders(ctx: &mut Context, action: ReminderAction) -> Result<bool> {
    match action {
        ReminderAction::List {
            search,
            category,
            priority,
            view,
        } => {
            let filter = ReminderFilter {
                search,
                category,
                priority: priority.as_deref().map(str::parse).transpose()?,
                view: view.parse()?,
            };
            let today = Local::now().weekday();
            let reminders = apply_filters(ctx.manager.reminders(), &filter, today);
            let categories = unique_categories(ctx.manager.reminders());
            display_reminders(&reminders, &categories);
            Ok(false)
        }
        ReminderAction::Add {
            title,
            time,
            days,
            priority,
            category,
            recurrence,
            location,
        } => {
            let draft = ReminderDraft {
                title,
                time,
                days: parse_days(&days)?,
                priority: priority.as_deref().map(str::parse).transpose()?,
                category,
                recurrence: recurrence.as_deref().map(str::parse).transpose()?,
                location,
            };
            let reminder = ctx.manager.add_reminder(draft.into_reminder()?);
            println!("Reminder added: {} @ {}", reminder.title, reminder.time);
            Ok(true)
        }
        ReminderAction::Remove { key } => {
            let removed = ctx.manager.remove_reminder(&key)?;
            println!("Reminder removed: {}", removed.title);
            Ok(true)
        }
        ReminderAction::Suggested { add } => {
            let pending = pending_suggestions(ctx.manager.reminders());
            display_reminder_drafts(&pending);
            if !add || pending.is_empty() {
                return Ok(false);
            }

            let labels: Vec<String> = pending
                .iter()
                .map(|d| format!("{} ({})", d.title, d.time))
                .collect();
            let Some(selection) = prompt_pick("Add which reminder?", &labels)? else {
                return Ok(false);
            };

            let Some(draft) = pending.into_iter().nth(selection) else {
                return Ok(false);
            };
            let reminder = ctx.manager.add_reminder(draft.into_reminder()?);
            println!("Reminder added: {} @ {}", reminder.title, reminder.time);
            Ok(true)
        }
    }
}
