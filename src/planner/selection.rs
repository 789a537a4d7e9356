use crate::models::{Category, FoodItem, MealMacros};
use crate::planner::constants::{
    CARB_CATEGORY_MULT, PROTEIN_CATEGORY_MULT, VEGETABLE_CATEGORY_MULT,
};
use crate::planner::nutrition::base_macros;

/// Unmet macro grams still to be planned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacroBudget {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroBudget {
    pub fn new(protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            protein,
            carbs,
            fats,
        }
    }

    /// Budget left after `consumed`, clamped at zero per macro.
    pub fn remaining_after(&self, consumed: &MealMacros) -> Self {
        Self {
            protein: (self.protein - consumed.protein).max(0.0),
            carbs: (self.carbs - consumed.carbs).max(0.0),
            fats: (self.fats - consumed.fats).max(0.0),
        }
    }

    /// Even share of the budget over `slots` meals.
    pub fn per_meal(&self, slots: usize) -> Self {
        let n = slots.max(1) as f64;
        Self {
            protein: self.protein / n,
            carbs: self.carbs / n,
            fats: self.fats / n,
        }
    }

    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }

    /// Share of each macro in the budget; equal thirds when the budget is empty.
    pub fn ratios(&self) -> MacroRatios {
        let total = self.total();
        if total <= 0.0 {
            return MacroRatios {
                protein: 1.0 / 3.0,
                carbs: 1.0 / 3.0,
                fats: 1.0 / 3.0,
            };
        }
        MacroRatios {
            protein: self.protein / total,
            carbs: self.carbs / total,
            fats: self.fats / total,
        }
    }
}

/// Macro profile normalized to sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroRatios {
    /// Profile of a food at its base serving. `None` when it has no macros.
    pub fn of_item(item: &FoodItem) -> Option<Self> {
        let macros = base_macros(item);
        let total = macros.total_grams();
        if total <= 0.0 {
            return None;
        }
        Some(Self {
            protein: macros.protein / total,
            carbs: macros.carbs / total,
            fats: macros.fats / total,
        })
    }

    /// L1 distance between two profiles.
    pub fn distance(&self, other: &MacroRatios) -> f64 {
        (self.protein - other.protein).abs()
            + (self.carbs - other.carbs).abs()
            + (self.fats - other.fats).abs()
    }
}

/// Weight applied to the raw distance for a food in a given category.
pub fn category_multiplier(category: Category, item: &FoodItem) -> f64 {
    let macros = base_macros(item);
    match category {
        Category::Protein if macros.protein > 0.0 => PROTEIN_CATEGORY_MULT,
        Category::Carb if macros.carbs > 0.0 => CARB_CATEGORY_MULT,
        Category::Vegetable if item.per_100g.has_fiber() => VEGETABLE_CATEGORY_MULT,
        _ => 1.0,
    }
}

/// Final score for one candidate; higher is better. `None` for zero-macro foods.
pub fn match_score(item: &FoodItem, target: &MacroRatios, category: Category) -> Option<f64> {
    let ratios = MacroRatios::of_item(item)?;
    let raw = ratios.distance(target);
    Some(-raw * category_multiplier(category, item))
}

/// Candidate food with its computed score.
#[derive(Debug)]
struct Candidate<'a> {
    food: &'a FoodItem,
    score: f64,
}

/// Pick the candidate whose macro profile best fits the remaining budget.
///
/// Foods without any macros are never returned. Ties keep the first candidate.
pub fn select_best_match<'a>(
    candidates: &[&'a FoodItem],
    remaining: &MacroBudget,
    category: Category,
) -> Option<&'a FoodItem> {
    let target = remaining.ratios();

    candidates
        .iter()
        .filter_map(|&food| {
            match_score(food, &target, category).map(|score| Candidate { food, score })
        })
        .fold(None, |best: Option<Candidate>, c| match best {
            Some(b) if b.score >= c.score => Some(b),
            _ => Some(c),
        })
        .map(|c| c.food)
}
