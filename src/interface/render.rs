use crate::catalog::Catalog;
use crate::models::{Category, DailyMealPlan, FoodItem, MacroTargets, MealComponent, ShoppingListItem};
use crate::planner::NutritionSummary;

fn component_line(component: &MealComponent) -> String {
    format!(
        "{} {} ({:.0}g, {} min)",
        component.method, component.name, component.serving, component.cooking_time
    )
}

/// Display a generated plan day by day.
pub fn display_meal_plan(plan: &[DailyMealPlan]) {
    if plan.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    println!();
    println!("=== Meal Plan ===");

    for day in plan {
        let totals = day.macros();
        println!();
        println!(
            "--- Day {} ({:.0} kcal | P {:.0}g C {:.0}g F {:.0}g) ---",
            day.day, totals.calories, totals.protein, totals.carbs, totals.fats
        );

        for meal in &day.meals {
            println!();
            println!("{}  [{} min]", meal.label, meal.total_cooking_time);
            println!("  Protein:    {}", component_line(&meal.protein));
            println!("  Carbs:      {}", component_line(&meal.carb));
            for veg in &meal.vegetables {
                println!("  Vegetable:  {}", component_line(veg));
            }
            let macros = meal.macros();
            println!(
                "  Nutrition:  {:.0} kcal | P {:.0}g C {:.0}g F {:.0}g",
                macros.calories, macros.protein, macros.carbs, macros.fats
            );
        }
    }

    println!();
}

/// Display daily averages against the targets.
pub fn display_nutrition_summary(summary: &NutritionSummary, targets: &MacroTargets) {
    let avg = &summary.daily_average;
    let pct = &summary.percent_of_target;

    println!("--- Daily Average vs Target ---");
    println!(
        "Calories: {:>5.0} / {:<5} kcal ({:.0}%)",
        avg.calories, summary.target_calories, pct.calories
    );
    println!(
        "Protein:  {:>5.0} / {:<5} g    ({:.0}%)",
        avg.protein, targets.daily_protein, pct.protein
    );
    println!(
        "Carbs:    {:>5.0} / {:<5} g    ({:.0}%)",
        avg.carbs, targets.daily_carbs, pct.carbs
    );
    println!(
        "Fats:     {:>5.0} / {:<5} g    ({:.0}%)",
        avg.fats, targets.daily_fats, pct.fats
    );
    println!(
        "Calories from protein {}%, carbs {}%, fats {}%",
        summary.distribution.protein, summary.distribution.carbs, summary.distribution.fats
    );
    println!();
}

/// Display the aggregated shopping list.
pub fn display_shopping_list(list: &[ShoppingListItem]) {
    if list.is_empty() {
        println!("Shopping list: (empty)");
        return;
    }

    let width = list.iter().map(|i| i.name.len()).max().unwrap_or(10);

    println!("=== Shopping List ({} items) ===", list.len());
    for item in list {
        println!(
            "  {:<width$}  {:>6.0}{}",
            item.name,
            item.total,
            item.unit,
            width = width
        );
    }
    println!();
}

/// Display the catalog grouped by category.
pub fn display_catalog(catalog: &Catalog) {
    for (category, title) in [
        (Category::Protein, "Proteins"),
        (Category::Carb, "Carbs"),
        (Category::Vegetable, "Vegetables"),
    ] {
        display_food_list(catalog.items(category), title);
    }
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} - {}g serving, P:{} C:{} F:{} per 100g, {} min, {}, {}",
            food.name,
            food.serving_grams,
            food.per_100g.protein,
            food.per_100g.carbs,
            food.per_100g.fat,
            food.cooking_time_minutes,
            food.complexity.as_str(),
            food.spice_level.as_str()
        );
    }

    println!();
}

/// Display a food's recipe, methods and nutrition.
pub fn display_recipe(food: &FoodItem) {
    println!();
    println!("=== {} ({}) ===", food.name, food.category);
    println!(
        "Serving {}g | {} min | {} | {}",
        food.serving_grams,
        food.cooking_time_minutes,
        food.complexity.as_str(),
        food.spice_level.as_str()
    );
    println!("Methods: {}", food.methods.join(", "));
    println!(
        "Per 100g: {} kcal, P {}g, C {}g, F {}g",
        food.per_100g.calories, food.per_100g.protein, food.per_100g.carbs, food.per_100g.fat
    );
    if !food.allergens.is_empty() {
        println!("Allergens: {}", food.allergens.join(", "));
    }

    println!();
    if food.recipe_steps.is_empty() {
        println!("No recipe steps recorded.");
    } else {
        for (i, step) in food.recipe_steps.iter().enumerate() {
            println!("{:>3}. {}", i + 1, step);
        }
    }
    println!();
}
