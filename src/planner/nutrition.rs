use crate::models::{FoodItem, MealMacros, Nutrition};
use crate::planner::constants::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Scale a per-100g nutrition vector to a serving in grams.
pub fn macros_for_nutrition(per_100g: &Nutrition, serving_grams: f64) -> MealMacros {
    let multiplier = serving_grams / 100.0;
    MealMacros {
        protein: per_100g.protein * multiplier,
        carbs: per_100g.carbs * multiplier,
        fats: per_100g.fat * multiplier,
        calories: per_100g.calories * multiplier,
    }
}

/// Macros of a food at the given serving.
pub fn macros_for_serving(item: &FoodItem, serving_grams: f64) -> MealMacros {
    macros_for_nutrition(&item.per_100g, serving_grams)
}

/// Macros of a food at its base catalog serving.
pub fn base_macros(item: &FoodItem) -> MealMacros {
    macros_for_serving(item, item.serving_grams)
}

/// Calories from macro grams, rounded to the nearest whole calorie.
pub fn calories_from_macros(protein: f64, carbs: f64, fats: f64) -> u32 {
    let kcal = protein * KCAL_PER_G_PROTEIN + carbs * KCAL_PER_G_CARBS + fats * KCAL_PER_G_FAT;
    kcal.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Complexity, SpiceLevel};

    fn chicken() -> FoodItem {
        FoodItem {
            id: "chicken-breast".to_string(),
            name: "Chicken Breast".to_string(),
            serving_grams: 180.0,
            per_100g: Nutrition {
                protein: 31.0,
                fat: 3.6,
                carbs: 0.0,
                calories: 165.0,
                fiber: Some(0.0),
                sugar: Some(0.0),
            },
            methods: vec!["Grilled".to_string()],
            cooking_time_minutes: 20,
            complexity: Complexity::Easy,
            spice_level: SpiceLevel::Mild,
            category: Category::Protein,
            recipe_steps: vec![],
            allergens: vec![],
            tags: vec![],
        }
    }

    #[test]
    fn test_macros_for_serving() {
        let m = macros_for_serving(&chicken(), 200.0);
        assert!((m.protein - 62.0).abs() < 1e-9);
        assert!((m.fats - 7.2).abs() < 1e-9);
        assert_eq!(m.carbs, 0.0);
        assert!((m.calories - 330.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_serving_is_zero() {
        let m = macros_for_serving(&chicken(), 0.0);
        assert_eq!(m, MealMacros::default());
    }

    #[test]
    fn test_base_macros_uses_catalog_serving() {
        let m = base_macros(&chicken());
        assert!((m.protein - 55.8).abs() < 1e-9);
    }

    #[test]
    fn test_calories_from_macros() {
        assert_eq!(calories_from_macros(150.0, 200.0, 60.0), 1940);
        assert_eq!(calories_from_macros(0.0, 0.0, 0.0), 0);
        // 4 * 0.3 + 9 * 0.1 = 2.1
        assert_eq!(calories_from_macros(0.3, 0.0, 0.1), 2);
    }
}
