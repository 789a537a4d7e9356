pub mod food;
pub mod plan;
pub mod targets;

pub use food::{Category, Complexity, FoodItem, Nutrition, SpiceLevel};
pub use plan::{DailyMealPlan, Meal, MealComponent, MealMacros, ShoppingListItem, all_meals};
pub use targets::{
    ComplexityPreference, CookingPreferences, MacroTargets, PreparationTime, SpicePreference,
};
