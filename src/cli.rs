use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::{ComplexityPreference, CookingPreferences, PreparationTime, SpicePreference};
use crate::planner::constants::{DEFAULT_PLAN_DAYS, MAX_PLAN_DAYS};

/// Builds multi-day meal plans from macro targets and cooking preferences.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a food catalog JSON file (built-in catalog when omitted).
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan, nutrition summary and shopping list.
    Plan(PlanArgs),

    /// List the foods in the catalog.
    Catalog,

    /// Show the recipe for a food (fuzzy name matching).
    Recipe {
        /// Food name or id.
        name: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Daily protein target in grams.
    #[arg(long)]
    pub protein: Option<f64>,

    /// Daily carbohydrate target in grams.
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Daily fat target in grams.
    #[arg(long)]
    pub fats: Option<f64>,

    /// Maximum preparation time.
    #[arg(long, value_enum, default_value_t = PrepTimeArg::Any)]
    pub prep_time: PrepTimeArg,

    /// Preferred recipe complexity.
    #[arg(long, value_enum, default_value_t = ComplexityArg::Any)]
    pub complexity: ComplexityArg,

    /// Preferred spice level.
    #[arg(long, value_enum, default_value_t = SpiceArg::Any)]
    pub spice: SpiceArg,

    /// Number of days to plan (two meals per day).
    #[arg(
        long,
        default_value_t = DEFAULT_PLAN_DAYS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_PLAN_DAYS as u64)
    )]
    pub days: usize,

    /// Always use each food's first cooking method instead of a random one.
    #[arg(long)]
    pub first_method: bool,

    /// Prompt for targets and preferences interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Write the plan and shopping list as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write a printable HTML document.
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Write the shopping list as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            protein: None,
            carbs: None,
            fats: None,
            prep_time: PrepTimeArg::Any,
            complexity: ComplexityArg::Any,
            spice: SpiceArg::Any,
            days: DEFAULT_PLAN_DAYS,
            first_method: false,
            interactive: false,
            json: None,
            html: None,
            csv: None,
        }
    }
}

impl PlanArgs {
    pub fn preferences(&self) -> CookingPreferences {
        CookingPreferences {
            preparation_time: self.prep_time.into(),
            complexity: self.complexity.into(),
            spice_level: self.spice.into(),
        }
    }
}

#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PrepTimeArg {
    Quick,
    Moderate,
    #[default]
    Any,
}

impl From<PrepTimeArg> for PreparationTime {
    fn from(arg: PrepTimeArg) -> Self {
        match arg {
            PrepTimeArg::Quick => PreparationTime::Quick,
            PrepTimeArg::Moderate => PreparationTime::Moderate,
            PrepTimeArg::Any => PreparationTime::Any,
        }
    }
}

#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityArg {
    Easy,
    Medium,
    Complex,
    #[default]
    Any,
}

impl From<ComplexityArg> for ComplexityPreference {
    fn from(arg: ComplexityArg) -> Self {
        match arg {
            ComplexityArg::Easy => ComplexityPreference::Easy,
            ComplexityArg::Medium => ComplexityPreference::Medium,
            ComplexityArg::Complex => ComplexityPreference::Complex,
            ComplexityArg::Any => ComplexityPreference::Any,
        }
    }
}

#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SpiceArg {
    Mild,
    Medium,
    Spicy,
    #[default]
    Any,
}

impl From<SpiceArg> for SpicePreference {
    fn from(arg: SpiceArg) -> Self {
        match arg {
            SpiceArg::Mild => SpicePreference::Mild,
            SpiceArg::Medium => SpicePreference::Medium,
            SpiceArg::Spicy => SpicePreference::Spicy,
            SpiceArg::Any => SpicePreference::Any,
        }
    }
}
