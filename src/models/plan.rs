use serde::{Deserialize, Serialize};

use crate::models::{Complexity, FoodItem, Nutrition};
use crate::planner::nutrition::macros_for_nutrition;

/// Macro totals for a component, meal, or day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MealMacros {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
}

impl MealMacros {
    /// Sum of protein, carbs and fats in grams.
    pub fn total_grams(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }
}

impl std::ops::Add for MealMacros {
    type Output = MealMacros;

    fn add(self, rhs: MealMacros) -> MealMacros {
        MealMacros {
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
            calories: self.calories + rhs.calories,
        }
    }
}

impl std::ops::AddAssign for MealMacros {
    fn add_assign(&mut self, rhs: MealMacros) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for MealMacros {
    fn sum<I: Iterator<Item = MealMacros>>(iter: I) -> Self {
        iter.fold(MealMacros::default(), |acc, m| acc + m)
    }
}

/// A food bound to one meal, with its chosen serving and method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealComponent {
    pub id: String,
    pub name: String,
    /// Chosen serving in grams.
    pub serving: f64,
    pub method: String,
    pub recipe_steps: Vec<String>,
    pub cooking_time: u32,
    pub complexity: Complexity,
    #[serde(rename = "per100g")]
    pub per_100g: Nutrition,
}

impl MealComponent {
    pub fn new(item: &FoodItem, serving: f64, method: String) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            serving,
            method,
            recipe_steps: item.recipe_steps.clone(),
            cooking_time: item.cooking_time_minutes,
            complexity: item.complexity,
            per_100g: item.per_100g,
        }
    }

    /// Macros at the chosen serving, from the nutrition snapshot.
    pub fn macros(&self) -> MealMacros {
        macros_for_nutrition(&self.per_100g, self.serving)
    }
}

/// One lunch or dinner slot.
///
/// Macros are not stored: they are summed from the components on every read
/// and written to JSON only as a derived field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MealRecord", into = "MealRecord")]
pub struct Meal {
    /// 1-based slot index across the whole plan.
    pub id: usize,
    /// Label such as "Day 1 - Lunch".
    pub label: String,
    pub protein: MealComponent,
    pub carb: MealComponent,
    pub vegetables: [MealComponent; 2],
    pub total_cooking_time: u32,
}

/// Serialized form of a meal. Incoming `macros` are ignored.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MealRecord {
    id: usize,
    #[serde(rename = "meal")]
    label: String,
    protein: MealComponent,
    carb: MealComponent,
    vegetables: [MealComponent; 2],
    #[serde(default)]
    macros: MealMacros,
    total_cooking_time: u32,
}

impl From<Meal> for MealRecord {
    fn from(meal: Meal) -> Self {
        let macros = meal.macros();
        Self {
            id: meal.id,
            label: meal.label,
            protein: meal.protein,
            carb: meal.carb,
            vegetables: meal.vegetables,
            macros,
            total_cooking_time: meal.total_cooking_time,
        }
    }
}

impl From<MealRecord> for Meal {
    fn from(record: MealRecord) -> Self {
        Self {
            id: record.id,
            label: record.label,
            protein: record.protein,
            carb: record.carb,
            vegetables: record.vegetables,
            total_cooking_time: record.total_cooking_time,
        }
    }
}

impl Meal {
    /// Assemble a meal; cooking time is the longest component plus overhead.
    pub fn new(
        id: usize,
        label: String,
        protein: MealComponent,
        carb: MealComponent,
        vegetables: [MealComponent; 2],
        prep_overhead_minutes: u32,
    ) -> Self {
        let longest = [&protein, &carb, &vegetables[0], &vegetables[1]]
            .iter()
            .map(|c| c.cooking_time)
            .max()
            .unwrap_or(0);

        Self {
            id,
            label,
            protein,
            carb,
            vegetables,
            total_cooking_time: longest + prep_overhead_minutes,
        }
    }

    /// Sum of the component macros.
    pub fn macros(&self) -> MealMacros {
        self.components().map(|c| c.macros()).sum()
    }

    /// Protein, carb, then both vegetables.
    pub fn components(&self) -> impl Iterator<Item = &MealComponent> {
        [&self.protein, &self.carb]
            .into_iter()
            .chain(self.vegetables.iter())
    }
}

/// All meals of one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DayRecord", into = "DayRecord")]
pub struct DailyMealPlan {
    pub day: usize,
    pub meals: Vec<Meal>,
}

#[derive(Serialize, Deserialize)]
struct DayRecord {
    day: usize,
    meals: Vec<Meal>,
    #[serde(default)]
    macros: MealMacros,
}

impl From<DailyMealPlan> for DayRecord {
    fn from(plan: DailyMealPlan) -> Self {
        let macros = plan.macros();
        Self {
            day: plan.day,
            meals: plan.meals,
            macros,
        }
    }
}

impl From<DayRecord> for DailyMealPlan {
    fn from(record: DayRecord) -> Self {
        Self::new(record.day, record.meals)
    }
}

impl DailyMealPlan {
    pub fn new(day: usize, meals: Vec<Meal>) -> Self {
        Self { day, meals }
    }

    /// Combined macros of the day's meals.
    pub fn macros(&self) -> MealMacros {
        self.meals.iter().map(|m| m.macros()).sum()
    }
}

/// Flatten a day-grouped plan into its meals, in order.
pub fn all_meals(plan: &[DailyMealPlan]) -> impl Iterator<Item = &Meal> {
    plan.iter().flat_map(|day| day.meals.iter())
}

/// Aggregated purchase quantity for one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    pub total: f64,
    pub unit: String,
}
