use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_plan_maker_rs::catalog::{Catalog, builtin_catalog, load_catalog};
use meal_plan_maker_rs::cli::{Cli, Command, PlanArgs};
use meal_plan_maker_rs::error::Result;
use meal_plan_maker_rs::export::{
    PlanExport, write_plan_json, write_print_document, write_shopping_list_csv,
};
use meal_plan_maker_rs::interface::{
    display_catalog, display_meal_plan, display_nutrition_summary, display_recipe,
    display_shopping_list, prompt_macro_targets, prompt_preferences, prompt_yes_no,
};
use meal_plan_maker_rs::models::MacroTargets;
use meal_plan_maker_rs::planner::{
    FirstMethodPicker, NutritionSummary, PlanConfig, RandomMethodPicker, generate_meal_plan,
    generate_shopping_list,
};

/// Default JSON path offered in interactive mode.
const DEFAULT_EXPORT_PATH: &str = "meal_plan.json";

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so the rendered plan on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("meal_plan_maker_rs=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = open_catalog(cli.catalog.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&catalog, &args),
        Command::Catalog => cmd_catalog(&catalog),
        Command::Recipe { name } => cmd_recipe(&catalog, &name),
    }
}

fn open_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => {
            let catalog = load_catalog(p)?;
            tracing::info!(path = %p.display(), foods = catalog.len(), "loaded catalog");
            Ok(catalog)
        }
        None => builtin_catalog(),
    }
}

/// Generate and display a meal plan, then write any requested exports.
fn cmd_plan(catalog: &Catalog, args: &PlanArgs) -> Result<()> {
    let targets = match (args.protein, args.carbs, args.fats) {
        (Some(protein), Some(carbs), Some(fats)) if !args.interactive => {
            MacroTargets::new(protein, carbs, fats)
        }
        (protein, carbs, fats) => prompt_macro_targets(protein, carbs, fats)?,
    };

    let preferences = if args.interactive {
        prompt_preferences()?
    } else {
        args.preferences()
    };

    let config = PlanConfig {
        days: args.days,
        ..PlanConfig::default()
    };

    println!(
        "Planning {} days for {}g protein, {}g carbs, {}g fats ({} kcal/day)...",
        config.days,
        targets.daily_protein,
        targets.daily_carbs,
        targets.daily_fats,
        targets.daily_calories()
    );

    let plan = if args.first_method {
        generate_meal_plan(catalog, &targets, &preferences, &config, FirstMethodPicker)?
    } else {
        generate_meal_plan(
            catalog,
            &targets,
            &preferences,
            &config,
            RandomMethodPicker::default(),
        )?
    };
    let shopping_list = generate_shopping_list(&plan);
    let summary = NutritionSummary::from_plan(&plan, &targets);

    display_meal_plan(&plan);
    display_nutrition_summary(&summary, &targets);
    display_shopping_list(&shopping_list);

    if let Some(path) = &args.html {
        write_print_document(path, &plan, &shopping_list, &targets)?;
        println!("Printable plan written to {}", path.display());
    }

    if let Some(path) = &args.csv {
        write_shopping_list_csv(&shopping_list, path)?;
        println!("Shopping list written to {}", path.display());
    }

    let json_path = match &args.json {
        Some(path) => Some(path.clone()),
        None if args.interactive => {
            let save = prompt_yes_no(&format!("Save plan to {}?", DEFAULT_EXPORT_PATH), false)?;
            save.then(|| PathBuf::from(DEFAULT_EXPORT_PATH))
        }
        None => None,
    };

    if let Some(path) = json_path {
        let export = PlanExport::new(targets, plan, shopping_list);
        write_plan_json(&path, &export)?;
        println!("Plan saved to {}", path.display());
    }

    Ok(())
}

/// List catalog foods per category.
fn cmd_catalog(catalog: &Catalog) -> Result<()> {
    println!("Loaded {} foods", catalog.len());
    display_catalog(catalog);
    Ok(())
}

/// Show a single food's recipe.
fn cmd_recipe(catalog: &Catalog, name: &str) -> Result<()> {
    let food = catalog.find_food(name)?;
    if !food.name.eq_ignore_ascii_case(name.trim()) && !food.id.eq_ignore_ascii_case(name.trim()) {
        println!("Closest match for '{}': {}", name, food.name);
    }
    display_recipe(food);
    Ok(())
}
