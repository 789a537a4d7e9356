use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::{PlannerError, Result};
use crate::models::{
    Category, CookingPreferences, DailyMealPlan, FoodItem, MacroTargets, Meal, MealComponent,
    MealMacros,
};
use crate::planner::config::PlanConfig;
use crate::planner::constants::{MEAL_NAMES, MEALS_PER_DAY};
use crate::planner::filter::{exclude_ids, filter_by_preferences};
use crate::planner::methods::MethodPicker;
use crate::planner::nutrition::base_macros;
use crate::planner::rotation::RotationState;
use crate::planner::selection::{MacroBudget, select_best_match};
use crate::planner::serving::adjust_serving_size;

/// Builds a plan one meal slot at a time.
///
/// Holds the running macro totals and the per-category rotation windows.
/// Every slot spreads the unmet budget over the slots still to come.
pub struct PlanBuilder<'a, P: MethodPicker> {
    catalog: &'a Catalog,
    preferences: CookingPreferences,
    config: PlanConfig,
    picker: P,
    plan_target: MacroBudget,
    consumed: MealMacros,
    rotation: RotationState,
    meals: Vec<Meal>,
}

impl<'a, P: MethodPicker> PlanBuilder<'a, P> {
    pub fn new(
        catalog: &'a Catalog,
        targets: &MacroTargets,
        preferences: CookingPreferences,
        config: PlanConfig,
        picker: P,
    ) -> Result<Self> {
        config.validate()?;
        if !targets.is_valid() {
            return Err(PlannerError::InvalidInput(
                "Macro targets must be non-negative numbers".to_string(),
            ));
        }

        let days = config.days as f64;
        let plan_target = MacroBudget::new(
            targets.daily_protein * days,
            targets.daily_carbs * days,
            targets.daily_fats * days,
        );

        Ok(Self {
            catalog,
            preferences,
            rotation: RotationState::new(&config),
            meals: Vec::with_capacity(config.total_meals()),
            config,
            picker,
            plan_target,
            consumed: MealMacros::default(),
        })
    }

    /// Macros planned so far.
    pub fn consumed(&self) -> &MealMacros {
        &self.consumed
    }

    /// Budget not yet covered by planned meals, clamped at zero.
    pub fn remaining(&self) -> MacroBudget {
        self.plan_target.remaining_after(&self.consumed)
    }

    pub fn is_complete(&self) -> bool {
        self.meals.len() >= self.config.total_meals()
    }

    /// Plan the next meal slot.
    pub fn next_meal(&mut self) -> Result<&Meal> {
        let slot = self.meals.len();
        let total = self.config.total_meals();
        if slot >= total {
            return Err(PlannerError::InvalidInput(format!(
                "Plan already has all {} meals",
                total
            )));
        }

        let remaining = self.remaining();
        let per_meal = remaining.per_meal(total - slot);

        let protein = self.pick_required(Category::Protein, &remaining)?;
        let carb = self.pick_required(Category::Carb, &remaining)?;
        let veg1 = self.pick_required(Category::Vegetable, &remaining)?;
        let veg2 = self.pick_second_vegetable(veg1, &remaining);

        let protein_serving = self.adjust(protein, per_meal.protein, base_macros(protein).protein);
        let carb_serving = self.adjust(carb, per_meal.carbs, base_macros(carb).carbs);
        let veg1_serving = self.adjust(veg1, per_meal.carbs / 2.0, base_macros(veg1).carbs);
        let veg2_serving = self.adjust(veg2, per_meal.carbs / 2.0, base_macros(veg2).carbs);

        let protein_component = self.component(protein, protein_serving);
        let carb_component = self.component(carb, carb_serving);
        let veg1_component = self.component(veg1, veg1_serving);
        let veg2_component = self.component(veg2, veg2_serving);

        let label = format!(
            "Day {} - {}",
            slot / MEALS_PER_DAY + 1,
            MEAL_NAMES[slot % MEALS_PER_DAY]
        );

        let meal = Meal::new(
            slot + 1,
            label,
            protein_component,
            carb_component,
            [veg1_component, veg2_component],
            self.config.prep_overhead_minutes,
        );

        self.consumed += meal.macros();

        self.rotation.record(Category::Protein, &protein.id);
        self.rotation.record(Category::Carb, &carb.id);
        self.rotation.record(Category::Vegetable, &veg1.id);
        if veg2.id != veg1.id {
            self.rotation.record(Category::Vegetable, &veg2.id);
        }

        debug!(
            slot = slot + 1,
            meal = %meal.label,
            protein = %protein.id,
            carb = %carb.id,
            vegetables = %format!("{}, {}", veg1.id, veg2.id),
            calories = meal.macros().calories,
            "planned meal"
        );

        self.meals.push(meal);
        Ok(&self.meals[slot])
    }

    /// Plan all remaining slots and group the meals by day.
    pub fn build(mut self) -> Result<Vec<DailyMealPlan>> {
        while !self.is_complete() {
            self.next_meal()?;
        }

        info!(
            meals = self.meals.len(),
            protein = self.consumed.protein,
            carbs = self.consumed.carbs,
            fats = self.consumed.fats,
            "meal plan generated"
        );

        Ok(self.finish())
    }

    /// Group the meals planned so far by day.
    pub fn finish(self) -> Vec<DailyMealPlan> {
        let mut days: Vec<DailyMealPlan> = Vec::with_capacity(self.config.days);
        let mut current: Vec<Meal> = Vec::with_capacity(MEALS_PER_DAY);

        for meal in self.meals {
            current.push(meal);
            if current.len() == MEALS_PER_DAY {
                let day = days.len() + 1;
                days.push(DailyMealPlan::new(day, std::mem::take(&mut current)));
            }
        }
        if !current.is_empty() {
            let day = days.len() + 1;
            days.push(DailyMealPlan::new(day, current));
        }

        days
    }

    /// Best match in a category after dropping `excluded` ids.
    fn pick_from(
        &self,
        category: Category,
        excluded: &[&str],
        remaining: &MacroBudget,
    ) -> Option<&'a FoodItem> {
        let catalog: &'a Catalog = self.catalog;
        let all: Vec<&'a FoodItem> = catalog.items(category).iter().collect();
        let pool = exclude_ids(&all, excluded);
        let candidates = filter_by_preferences(&pool, &self.preferences);
        select_best_match(&candidates, remaining, category)
    }

    /// Pick avoiding recently used foods; the window is relaxed before giving up.
    fn pick_required(&self, category: Category, remaining: &MacroBudget) -> Result<&'a FoodItem> {
        let window = self.rotation.window(category).ids();

        self.pick_from(category, &window, remaining)
            .or_else(|| {
                debug!(%category, "rotation window excludes every food, relaxing");
                self.pick_from(category, &[], remaining)
            })
            .ok_or(PlannerError::EmptyCategory(category))
    }

    /// Second vegetable, distinct from the first when the catalog allows it.
    fn pick_second_vegetable(&self, first: &'a FoodItem, remaining: &MacroBudget) -> &'a FoodItem {
        let mut excluded = self.rotation.window(Category::Vegetable).ids();
        excluded.push(first.id.as_str());

        self.pick_from(Category::Vegetable, &excluded, remaining)
            .or_else(|| self.pick_from(Category::Vegetable, &[first.id.as_str()], remaining))
            .unwrap_or_else(|| {
                warn!(vegetable = %first.id, "no second vegetable available, reusing the first");
                first
            })
    }

    fn adjust(&self, item: &FoodItem, target_macro: f64, actual_macro: f64) -> f64 {
        adjust_serving_size(
            target_macro,
            actual_macro,
            item.serving_grams,
            self.config.serving_clamp_min,
            self.config.serving_clamp_max,
        )
    }

    fn component(&mut self, item: &FoodItem, serving: f64) -> MealComponent {
        let method = self.picker.pick(&item.methods);
        MealComponent::new(item, serving, method)
    }
}

/// Generate a day-grouped meal plan.
///
/// Fails with `EmptyCategory` when a protein, carb or vegetable cannot be
/// picked at all; no partial plan is returned.
pub fn generate_meal_plan<P: MethodPicker>(
    catalog: &Catalog,
    targets: &MacroTargets,
    preferences: &CookingPreferences,
    config: &PlanConfig,
    picker: P,
) -> Result<Vec<DailyMealPlan>> {
    PlanBuilder::new(catalog, targets, *preferences, config.clone(), picker)?.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Complexity, Nutrition, SpiceLevel, all_meals};
    use crate::planner::methods::FirstMethodPicker;

    fn food(id: &str, category: Category, protein: f64, carbs: f64, fat: f64) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: id.to_string(),
            serving_grams: 100.0,
            per_100g: Nutrition {
                protein,
                fat,
                carbs,
                calories: protein * 4.0 + carbs * 4.0 + fat * 9.0,
                fiber: Some(2.0),
                sugar: None,
            },
            methods: vec!["Boiled".to_string(), "Baked".to_string()],
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
            vec![
                food("chicken", Category::Protein, 31.0, 0.0, 3.6),
                food("salmon", Category::Protein, 20.0, 0.0, 13.0),
                food("tofu", Category::Protein, 14.0, 2.0, 4.0),
            ],
            vec![
                food("rice", Category::Carb, 2.6, 23.0, 0.9),
                food("quinoa", Category::Carb, 4.4, 21.0, 1.9),
                food("oats", Category::Carb, 13.2, 67.7, 6.9),
            ],
            vec![
                food("broccoli", Category::Vegetable, 2.8, 7.0, 0.4),
                food("beans", Category::Vegetable, 1.8, 7.0, 0.2),
                food("spinach", Category::Vegetable, 2.9, 3.6, 0.4),
            ],
        )
    }

    fn build(catalog: &Catalog) -> Result<Vec<DailyMealPlan>> {
        generate_meal_plan(
            catalog,
            &MacroTargets::default(),
            &CookingPreferences::default(),
            &PlanConfig::default(),
            FirstMethodPicker,
        )
    }

    #[test]
    fn test_plan_shape_and_labels() {
        let plan = build(&sample_catalog()).unwrap();
        assert_eq!(plan.len(), 3);

        let labels: Vec<&str> = all_meals(&plan).map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Day 1 - Lunch",
                "Day 1 - Dinner",
                "Day 2 - Lunch",
                "Day 2 - Dinner",
                "Day 3 - Lunch",
                "Day 3 - Dinner",
            ]
        );

        let ids: Vec<usize> = all_meals(&plan).map(|m| m.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_vegetables_distinct_within_meal() {
        let plan = build(&sample_catalog()).unwrap();
        for meal in all_meals(&plan) {
            assert_ne!(meal.vegetables[0].id, meal.vegetables[1].id);
        }
    }

    #[test]
    fn test_consecutive_meals_rotate_proteins() {
        let plan = build(&sample_catalog()).unwrap();
        let meals: Vec<&Meal> = all_meals(&plan).collect();
        for pair in meals.windows(2) {
            assert_ne!(pair[0].protein.id, pair[1].protein.id);
            assert_ne!(pair[0].carb.id, pair[1].carb.id);
        }
        for triple in meals.windows(3) {
            assert_ne!(triple[0].protein.id, triple[2].protein.id);
        }
    }

    #[test]
    fn test_single_vegetable_is_reused() {
        let mut catalog = sample_catalog();
        catalog.vegetables.truncate(1);

        let plan = build(&catalog).unwrap();
        for meal in all_meals(&plan) {
            assert_eq!(meal.vegetables[0].id, "broccoli");
            assert_eq!(meal.vegetables[1].id, "broccoli");
        }
    }

    #[test]
    fn test_single_protein_relaxes_window() {
        let mut catalog = sample_catalog();
        catalog.proteins.truncate(1);

        let plan = build(&catalog).unwrap();
        assert_eq!(all_meals(&plan).count(), 6);
        assert!(all_meals(&plan).all(|m| m.protein.id == "chicken"));
    }

    #[test]
    fn test_empty_category_aborts() {
        let mut catalog = sample_catalog();
        catalog.carbs.clear();

        let err = build(&catalog).unwrap_err();
        assert!(matches!(err, PlannerError::EmptyCategory(Category::Carb)));
    }

    #[test]
    fn test_invalid_targets_rejected() {
        let err = generate_meal_plan(
            &sample_catalog(),
            &MacroTargets::new(-5.0, 100.0, 50.0),
            &CookingPreferences::default(),
            &PlanConfig::default(),
            FirstMethodPicker,
        )
        .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput(_)));
    }

    #[test]
    fn test_step_by_step_tracks_totals() {
        let catalog = sample_catalog();
        let mut builder = PlanBuilder::new(
            &catalog,
            &MacroTargets::default(),
            CookingPreferences::default(),
            PlanConfig::default(),
            FirstMethodPicker,
        )
        .unwrap();

        let first = builder.next_meal().unwrap().macros();
        assert_eq!(*builder.consumed(), first);

        let second = builder.next_meal().unwrap().macros();
        let expected = first + second;
        assert!((builder.consumed().protein - expected.protein).abs() < 1e-9);
        assert!(!builder.is_complete());

        let partial = builder.finish();
        assert_eq!(partial.len(), 1);
        assert_eq!(partial[0].meals.len(), 2);
    }

    #[test]
    fn test_next_meal_after_complete_errors() {
        let catalog = sample_catalog();
        let config = PlanConfig {
            days: 1,
            ..Default::default()
        };
        let mut builder = PlanBuilder::new(
            &catalog,
            &MacroTargets::default(),
            CookingPreferences::default(),
            config,
            FirstMethodPicker,
        )
        .unwrap();

        builder.next_meal().unwrap();
        builder.next_meal().unwrap();
        assert!(builder.is_complete());
        assert!(builder.next_meal().is_err());
    }

    #[test]
    fn test_servings_within_clamp() {
        let catalog = sample_catalog();
        let plan = build(&catalog).unwrap();

        for component in all_meals(&plan).flat_map(|m| m.components()) {
            let base = catalog.get_food(&component.id).unwrap().serving_grams;
            assert!(component.serving >= (base * 0.7).round());
            assert!(component.serving <= (base * 1.5).round());
        }
    }
}
