use serde::{Deserialize, Serialize};

use crate::models::{DailyMealPlan, MacroTargets, MealMacros};
use crate::planner::constants::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Progress toward each daily target, as a percentage capped at 100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetProgress {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Whole-percent share of calories from each macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroDistribution {
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

/// Nutrition overview of a finished plan against the daily targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummary {
    pub total: MealMacros,
    pub daily_average: MealMacros,
    pub target_calories: u32,
    pub percent_of_target: TargetProgress,
    pub distribution: MacroDistribution,
}

impl NutritionSummary {
    pub fn from_plan(plan: &[DailyMealPlan], targets: &MacroTargets) -> Self {
        let total: MealMacros = plan.iter().map(|day| day.macros()).sum();
        let days = plan.len().max(1) as f64;
        let daily_average = MealMacros {
            protein: total.protein / days,
            carbs: total.carbs / days,
            fats: total.fats / days,
            calories: total.calories / days,
        };
        let target_calories = targets.daily_calories();

        Self {
            total,
            daily_average,
            target_calories,
            percent_of_target: TargetProgress {
                calories: percent_of(daily_average.calories, f64::from(target_calories)),
                protein: percent_of(daily_average.protein, targets.daily_protein),
                carbs: percent_of(daily_average.carbs, targets.daily_carbs),
                fats: percent_of(daily_average.fats, targets.daily_fats),
            },
            distribution: distribution(&daily_average),
        }
    }
}

/// Rounded current value as a share of target, capped at 100%.
fn percent_of(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current.round() / target * 100.0).min(100.0)
}

fn distribution(macros: &MealMacros) -> MacroDistribution {
    if macros.calories <= 0.0 {
        return MacroDistribution::default();
    }
    let share = |kcal: f64| (kcal / macros.calories * 100.0).round().max(0.0) as u32;
    MacroDistribution {
        protein: share(macros.protein * KCAL_PER_G_PROTEIN),
        carbs: share(macros.carbs * KCAL_PER_G_CARBS),
        fats: share(macros.fats * KCAL_PER_G_FAT),
    }
}
