use tracing::debug;

use crate::models::{CookingPreferences, FoodItem};

/// Drop foods whose id is in `excluded`.
pub fn exclude_ids<'a>(items: &[&'a FoodItem], excluded: &[&str]) -> Vec<&'a FoodItem> {
    items
        .iter()
        .copied()
        .filter(|item| !excluded.contains(&item.id.as_str()))
        .collect()
}

/// Narrow candidates to those matching the cooking preferences.
///
/// Preferences are soft: when nothing matches, the unfiltered list is returned.
pub fn filter_by_preferences<'a>(
    items: &[&'a FoodItem],
    preferences: &CookingPreferences,
) -> Vec<&'a FoodItem> {
    let filtered: Vec<&FoodItem> = items
        .iter()
        .copied()
        .filter(|item| preferences.accepts(item))
        .collect();

    if filtered.is_empty() {
        if !items.is_empty() {
            debug!(
                candidates = items.len(),
                ?preferences,
                "no food matches preferences, using unfiltered candidates"
            );
        }
        return items.to_vec();
    }

    filtered
}
