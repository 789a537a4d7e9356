pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod planner;

pub use catalog::Catalog;
pub use error::{PlannerError, Result};
pub use models::{DailyMealPlan, FoodItem, MacroTargets, Meal, ShoppingListItem};
pub use planner::{generate_meal_plan, generate_shopping_list};
