pub mod builder;
pub mod config;
pub mod constants;
pub mod filter;
pub mod methods;
pub mod nutrition;
pub mod rotation;
pub mod selection;
pub mod serving;
pub mod shopping;
pub mod summary;

pub use builder::{PlanBuilder, generate_meal_plan};
pub use config::PlanConfig;
pub use constants::*;
pub use filter::{exclude_ids, filter_by_preferences};
pub use methods::{FirstMethodPicker, MethodPicker, RandomMethodPicker};
pub use nutrition::{base_macros, calories_from_macros, macros_for_nutrition, macros_for_serving};
pub use rotation::{RotationState, UsedWindow};
pub use selection::{MacroBudget, MacroRatios, category_multiplier, match_score, select_best_match};
pub use serving::adjust_serving_size;
pub use shopping::generate_shopping_list;
pub use summary::{MacroDistribution, NutritionSummary, TargetProgress};
