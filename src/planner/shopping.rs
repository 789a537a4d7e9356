use std::collections::HashMap;

use crate::models::{DailyMealPlan, ShoppingListItem, all_meals};
use crate::planner::constants::SHOPPING_UNIT;

/// Sum serving grams per distinct food across the whole plan.
///
/// Sorted by name, case-insensitive, with the id as tie-break.
pub fn generate_shopping_list(plan: &[DailyMealPlan]) -> Vec<ShoppingListItem> {
    let mut totals: HashMap<&str, ShoppingListItem> = HashMap::new();

    for component in all_meals(plan).flat_map(|meal| meal.components()) {
        totals
            .entry(component.id.as_str())
            .and_modify(|item| item.total += component.serving)
            .or_insert_with(|| ShoppingListItem {
                id: component.id.clone(),
                name: component.name.clone(),
                total: component.serving,
                unit: SHOPPING_UNIT.to_string(),
            });
    }

    let mut list: Vec<ShoppingListItem> = totals.into_values().collect();
    list.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Complexity, Meal, MealComponent, Nutrition};

    fn component(id: &str, name: &str, serving: f64) -> MealComponent {
        MealComponent {
            id: id.to_string(),
            name: name.to_string(),
            serving,
            method: "Boiled".to_string(),
            recipe_steps: vec![],
            cooking_time: 10,
            complexity: Complexity::Easy,
            per_100g: Nutrition::default(),
        }
    }

    fn meal(id: usize, protein: (&str, f64), carb: (&str, f64), vegs: [(&str, f64); 2]) -> Meal {
        Meal::new(
            id,
            format!("Meal {id}"),
            component(protein.0, protein.0, protein.1),
            component(carb.0, carb.0, carb.1),
            [
                component(vegs[0].0, vegs[0].0, vegs[0].1),
                component(vegs[1].0, vegs[1].0, vegs[1].1),
            ],
            5,
        )
    }

    #[test]
    fn test_totals_are_summed_per_id() {
        let plan = vec![DailyMealPlan::new(
            1,
            vec![
                meal(1, ("Chicken", 150.0), ("rice", 100.0), [("Kale", 80.0), ("Kale", 70.0)]),
                meal(2, ("Chicken", 126.0), ("Oats", 90.0), [("spinach", 100.0), ("Kale", 75.0)]),
            ],
        )];

        let list = generate_shopping_list(&plan);
        let names: Vec<&str> = list.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Chicken", "Kale", "Oats", "rice", "spinach"]);

        let total = |id: &str| list.iter().find(|i| i.id == id).unwrap().total;
        assert_eq!(total("Chicken"), 276.0);
        assert_eq!(total("Kale"), 225.0);
        assert_eq!(total("rice"), 100.0);
        assert!(list.iter().all(|i| i.unit == "g"));
    }

    #[test]
    fn test_empty_plan() {
        assert!(generate_shopping_list(&[]).is_empty());
    }
}
