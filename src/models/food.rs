use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog section a food belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Carb,
    Vegetable,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Protein => "protein",
            Category::Carb => "carb",
            Category::Vegetable => "vegetable",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Easy,
    Medium,
    Complex,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Easy => "easy",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpiceLevel {
    Mild,
    Medium,
    Spicy,
}

impl SpiceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpiceLevel::Mild => "mild",
            SpiceLevel::Medium => "medium",
            SpiceLevel::Spicy => "spicy",
        }
    }
}

/// Nutrient content normalized to 100 grams.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub calories: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
}

impl Nutrition {
    /// True when fiber is recorded with a non-zero amount.
    pub fn has_fiber(&self) -> bool {
        self.fiber.is_some_and(|f| f > 0.0)
    }
}

/// A catalog entry. Loaded once and never mutated by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,

    pub name: String,

    /// Base reference serving in grams.
    #[serde(rename = "serving")]
    pub serving_grams: f64,

    #[serde(rename = "per100g")]
    pub per_100g: Nutrition,

    pub methods: Vec<String>,

    #[serde(rename = "cookingTime")]
    pub cooking_time_minutes: u32,

    pub complexity: Complexity,

    pub spice_level: SpiceLevel,

    pub category: Category,

    #[serde(default)]
    pub recipe_steps: Vec<String>,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl FoodItem {
    /// Basic validation: positive serving, non-negative nutrients, at least one method.
    pub fn is_valid(&self) -> bool {
        let n = &self.per_100g;
        !self.id.trim().is_empty()
            && self.serving_grams > 0.0
            && n.protein >= 0.0
            && n.fat >= 0.0
            && n.carbs >= 0.0
            && n.calories >= 0.0
            && n.fiber.is_none_or(|f| f >= 0.0)
            && n.sugar.is_none_or(|s| s >= 0.0)
            && !self.methods.is_empty()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {}g, P:{} C:{} F:{} per 100g, {} min",
            self.name,
            self.category,
            self.serving_grams,
            self.per_100g.protein,
            self.per_100g.carbs,
            self.per_100g.fat,
            self.cooking_time_minutes
        )
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
