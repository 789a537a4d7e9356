use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{
    ComplexityPreference, CookingPreferences, MacroTargets, PreparationTime, SpicePreference,
};

/// Prompt for a daily gram target.
pub fn prompt_grams(label: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Daily {} target (g)", label))
        .default(default.to_string())
        .interact_text()?;

    let grams: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))?;

    if !grams.is_finite() || grams < 0.0 {
        return Err(PlannerError::InvalidInput(
            "Targets must be zero or more grams".to_string(),
        ));
    }

    Ok(grams)
}

/// Prompt for any macro target not already given.
pub fn prompt_macro_targets(
    protein: Option<f64>,
    carbs: Option<f64>,
    fats: Option<f64>,
) -> Result<MacroTargets> {
    let defaults = MacroTargets::default();

    let protein = match protein {
        Some(v) => v,
        None => prompt_grams("protein", defaults.daily_protein)?,
    };
    let carbs = match carbs {
        Some(v) => v,
        None => prompt_grams("carbs", defaults.daily_carbs)?,
    };
    let fats = match fats {
        Some(v) => v,
        None => prompt_grams("fats", defaults.daily_fats)?,
    };

    let targets = MacroTargets::new(protein, carbs, fats);
    println!("Daily calories (calculated): {} kcal", targets.daily_calories());
    Ok(targets)
}

/// Prompt for all three cooking preferences.
pub fn prompt_preferences() -> Result<CookingPreferences> {
    let time = Select::new()
        .with_prompt("Preparation time")
        .items(&["Quick (under 15 min)", "Moderate (15-30 min)", "Any"])
        .default(2)
        .interact()?;

    let complexity = Select::new()
        .with_prompt("Complexity")
        .items(&["Easy", "Medium", "Complex", "Any"])
        .default(3)
        .interact()?;

    let spice = Select::new()
        .with_prompt("Spice level")
        .items(&["Mild", "Medium", "Spicy", "Any"])
        .default(3)
        .interact()?;

    Ok(CookingPreferences {
        preparation_time: match time {
            0 => PreparationTime::Quick,
            1 => PreparationTime::Moderate,
            _ => PreparationTime::Any,
        },
        complexity: match complexity {
            0 => ComplexityPreference::Easy,
            1 => ComplexityPreference::Medium,
            2 => ComplexityPreference::Complex,
            _ => ComplexityPreference::Any,
        },
        spice_level: match spice {
            0 => SpicePreference::Mild,
            1 => SpicePreference::Medium,
            2 => SpicePreference::Spicy,
            _ => SpicePreference::Any,
        },
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
