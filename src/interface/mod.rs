pub mod prompts;
pub mod render;

pub use prompts::{prompt_grams, prompt_macro_targets, prompt_preferences, prompt_yes_no};
pub use render::{
    display_catalog, display_food_list, display_meal_plan, display_nutrition_summary,
    display_recipe, display_shopping_list,
};
