use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{Category, FoodItem};

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// The food catalog, split by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub proteins: Vec<FoodItem>,
    #[serde(default)]
    pub carbs: Vec<FoodItem>,
    #[serde(default)]
    pub vegetables: Vec<FoodItem>,
}

impl Catalog {
    pub fn new(proteins: Vec<FoodItem>, carbs: Vec<FoodItem>, vegetables: Vec<FoodItem>) -> Self {
        Self {
            proteins,
            carbs,
            vegetables,
        }
    }

    /// Items of one category, in catalog order.
    pub fn items(&self, category: Category) -> &[FoodItem] {
        match category {
            Category::Protein => &self.proteins,
            Category::Carb => &self.carbs,
            Category::Vegetable => &self.vegetables,
        }
    }

    /// Every item: proteins, then carbs, then vegetables.
    pub fn all_items(&self) -> impl Iterator<Item = &FoodItem> {
        self.proteins
            .iter()
            .chain(self.carbs.iter())
            .chain(self.vegetables.iter())
    }

    /// Check item data and that each item sits in its own category's list.
    pub fn validate(&self) -> Result<()> {
        for category in [Category::Protein, Category::Carb, Category::Vegetable] {
            for item in self.items(category) {
                if !item.is_valid() {
                    return Err(PlannerError::InvalidCatalog(format!(
                        "invalid food entry '{}'",
                        item.id
                    )));
                }
                if item.category != category {
                    return Err(PlannerError::InvalidCatalog(format!(
                        "'{}' is a {} but listed under {}",
                        item.id, item.category, category
                    )));
                }
            }
        }
        Ok(())
    }

    /// Get a food by id or name (case-insensitive).
    pub fn get_food(&self, query: &str) -> Option<&FoodItem> {
        let key = query.trim().to_lowercase();
        self.all_items()
            .find(|f| f.id.to_lowercase() == key || f.key() == key)
    }

    /// Foods whose name resembles the query, best match first.
    pub fn fuzzy_matches(&self, query: &str) -> Vec<(&FoodItem, f64)> {
        let needle = query.trim().to_lowercase();
        let mut candidates: Vec<(&FoodItem, f64)> = self
            .all_items()
            .map(|f| (f, jaro_winkler(&f.key(), &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }

    /// Exact lookup first, then the closest fuzzy match.
    pub fn find_food(&self, query: &str) -> Result<&FoodItem> {
        if let Some(food) = self.get_food(query) {
            return Ok(food);
        }

        self.fuzzy_matches(query)
            .first()
            .map(|(food, _)| *food)
            .ok_or_else(|| PlannerError::FoodNotFound(query.to_string()))
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.proteins.len() + self.carbs.len() + self.vegetables.len()
    }

    /// Check if the catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Complexity, Nutrition, SpiceLevel};

    fn food(id: &str, name: &str, category: Category) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: name.to_string(),
            serving_grams: 100.0,
            per_100g: Nutrition {
                protein: 10.0,
                fat: 2.0,
                carbs: 10.0,
                calories: 98.0,
                fiber: None,
                sugar: None,
            },
            methods: vec!["Boiled".to_string()],
            cooking_time_minutes: 10,
            complexity: Complexity::Easy,
            spice_level: SpiceLevel::Mild,
            category,
            recipe_steps: vec![],
            allergens: vec![],
            tags: vec![],
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![food("salmon-fillet", "Salmon Fillet", Category::Protein)],
            vec![food("brown-rice", "Brown Rice", Category::Carb)],
            vec![
                food("broccoli", "Broccoli", Category::Vegetable),
                food("kale", "Kale", Category::Vegetable),
            ],
        )
    }

    #[test]
    fn test_get_food_by_name_or_id() {
        let catalog = sample_catalog();
        assert!(catalog.get_food("brown rice").is_some());
        assert!(catalog.get_food("BROWN-RICE").is_some());
        assert!(catalog.get_food("tofu").is_none());
    }

    #[test]
    fn test_find_food_fuzzy() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find_food("brocolli").unwrap().id, "broccoli");
        assert!(matches!(
            catalog.find_food("zzzz"),
            Err(PlannerError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_validate_category_mismatch() {
        let mut catalog = sample_catalog();
        assert!(catalog.validate().is_ok());

        catalog
            .carbs
            .push(food("kale-2", "Kale Again", Category::Vegetable));
        assert!(matches!(
            catalog.validate(),
            Err(PlannerError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_len() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.items(Category::Vegetable).len(), 2);
        assert!(Catalog::default().is_empty());
    }
}
