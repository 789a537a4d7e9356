use serde::{Deserialize, Serialize};

use crate::models::{Complexity, FoodItem, SpiceLevel};
use crate::planner::constants::{MODERATE_PREP_MINUTES, QUICK_PREP_MINUTES};
use crate::planner::nutrition::calories_from_macros;

/// Daily macro-nutrient targets in grams.
///
/// Calories are never stored; they are derived from the macros on every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    pub daily_protein: f64,
    pub daily_carbs: f64,
    pub daily_fats: f64,
}

impl MacroTargets {
    pub fn new(daily_protein: f64, daily_carbs: f64, daily_fats: f64) -> Self {
        Self {
            daily_protein,
            daily_carbs,
            daily_fats,
        }
    }

    pub fn daily_calories(&self) -> u32 {
        calories_from_macros(self.daily_protein, self.daily_carbs, self.daily_fats)
    }

    /// Targets must be finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.daily_protein, self.daily_carbs, self.daily_fats]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

impl Default for MacroTargets {
    fn default() -> Self {
        Self::new(150.0, 200.0, 60.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreparationTime {
    Quick,
    Moderate,
    #[default]
    Any,
}

impl PreparationTime {
    /// Maximum cooking time in minutes, `None` for no limit.
    pub fn max_minutes(&self) -> Option<u32> {
        match self {
            PreparationTime::Quick => Some(QUICK_PREP_MINUTES),
            PreparationTime::Moderate => Some(MODERATE_PREP_MINUTES),
            PreparationTime::Any => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityPreference {
    Easy,
    Medium,
    Complex,
    #[default]
    Any,
}

impl ComplexityPreference {
    pub fn accepts(&self, complexity: Complexity) -> bool {
        match self {
            ComplexityPreference::Any => true,
            ComplexityPreference::Easy => complexity == Complexity::Easy,
            ComplexityPreference::Medium => complexity == Complexity::Medium,
            ComplexityPreference::Complex => complexity == Complexity::Complex,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpicePreference {
    Mild,
    Medium,
    Spicy,
    #[default]
    Any,
}

impl SpicePreference {
    pub fn accepts(&self, spice: SpiceLevel) -> bool {
        match self {
            SpicePreference::Any => true,
            SpicePreference::Mild => spice == SpiceLevel::Mild,
            SpicePreference::Medium => spice == SpiceLevel::Medium,
            SpicePreference::Spicy => spice == SpiceLevel::Spicy,
        }
    }
}

/// Soft cooking constraints applied when narrowing catalog candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingPreferences {
    pub preparation_time: PreparationTime,
    pub complexity: ComplexityPreference,
    pub spice_level: SpicePreference,
}

impl CookingPreferences {
    /// Whether a food satisfies all three preferences.
    pub fn accepts(&self, item: &FoodItem) -> bool {
        let time_ok = self
            .preparation_time
            .max_minutes()
            .is_none_or(|max| item.cooking_time_minutes <= max);

        time_ok
            && self.complexity.accepts(item.complexity)
            && self.spice_level.accepts(item.spice_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_calories_derived() {
        let targets = MacroTargets::new(150.0, 200.0, 60.0);
        assert_eq!(targets.daily_calories(), 1940);

        let mut changed = targets;
        changed.daily_fats = 70.0;
        assert_eq!(changed.daily_calories(), 2030);
    }

    #[test]
    fn test_targets_validation() {
        assert!(MacroTargets::default().is_valid());
        assert!(!MacroTargets::new(-1.0, 200.0, 60.0).is_valid());
        assert!(!MacroTargets::new(f64::NAN, 200.0, 60.0).is_valid());
    }

    #[test]
    fn test_preparation_thresholds() {
        assert_eq!(PreparationTime::Quick.max_minutes(), Some(15));
        assert_eq!(PreparationTime::Moderate.max_minutes(), Some(30));
        assert_eq!(PreparationTime::Any.max_minutes(), None);
    }

    #[test]
    fn test_preference_any_accepts_everything() {
        assert!(ComplexityPreference::Any.accepts(Complexity::Complex));
        assert!(SpicePreference::Any.accepts(SpiceLevel::Spicy));
        assert!(!ComplexityPreference::Easy.accepts(Complexity::Medium));
        assert!(!SpicePreference::Mild.accepts(SpiceLevel::Medium));
    }
}
