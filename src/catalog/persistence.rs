use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::FoodItem;

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// The built-in food catalog.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_catalog(BUILTIN_CATALOG)
}

/// Parse and validate a catalog document.
///
/// Deduplicates each category by id (last occurrence wins, first position kept).
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let raw: Catalog = serde_json::from_str(content)?;
    let catalog = Catalog::new(
        dedup_by_id(raw.proteins),
        dedup_by_id(raw.carbs),
        dedup_by_id(raw.vegetables),
    );
    catalog.validate()?;
    Ok(catalog)
}

/// Load a catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Save a catalog to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}

fn dedup_by_id(items: Vec<FoodItem>) -> Vec<FoodItem> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<FoodItem> = Vec::with_capacity(items.len());

    for item in items {
        match positions.get(&item.id) {
            Some(&idx) => out[idx] = item,
            None => {
                positions.insert(item.id.clone(), out.len());
                out.push(item);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.proteins.len(), 7);
        assert_eq!(catalog.carbs.len(), 7);
        assert_eq!(catalog.vegetables.len(), 9);
    }

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"{
            "proteins": [{"id": "tofu", "name": "Firm Tofu", "serving": 150,
                "per100g": {"protein": 14, "fat": 4, "carbs": 2, "calories": 144},
                "methods": ["Baked"], "cookingTime": 15, "complexity": "medium",
                "spiceLevel": "mild", "category": "protein"}],
            "carbs": [],
            "vegetables": []
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.proteins[0].name, "Firm Tofu");

        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), &catalog).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_deduplication() {
        let json = r#"{
            "vegetables": [
                {"id": "kale", "name": "Kale", "serving": 100,
                 "per100g": {"protein": 4, "fat": 1, "carbs": 9, "calories": 49},
                 "methods": ["Raw"], "cookingTime": 1, "complexity": "easy",
                 "spiceLevel": "mild", "category": "vegetable"},
                {"id": "spinach", "name": "Spinach", "serving": 100,
                 "per100g": {"protein": 3, "fat": 0, "carbs": 4, "calories": 23},
                 "methods": ["Raw"], "cookingTime": 1, "complexity": "easy",
                 "spiceLevel": "mild", "category": "vegetable"},
                {"id": "kale", "name": "Curly Kale", "serving": 80,
                 "per100g": {"protein": 4, "fat": 1, "carbs": 9, "calories": 49},
                 "methods": ["Sauteed"], "cookingTime": 6, "complexity": "easy",
                 "spiceLevel": "mild", "category": "vegetable"}
            ]
        }"#;

        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.vegetables.len(), 2);
        // Last occurrence wins, first position kept
        assert_eq!(catalog.vegetables[0].name, "Curly Kale");
        assert_eq!(catalog.vegetables[1].id, "spinach");
    }

    #[test]
    fn test_rejects_invalid_entries() {
        let json = r#"{
            "carbs": [{"id": "rice", "name": "Rice", "serving": 125,
                "per100g": {"protein": 3, "fat": 1, "carbs": 25, "calories": 120},
                "methods": [], "cookingTime": 20, "complexity": "easy",
                "spiceLevel": "mild", "category": "carb"}]
        }"#;

        assert!(matches!(
            parse_catalog(json),
            Err(PlannerError::InvalidCatalog(_))
        ));
    }
}
