use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{DailyMealPlan, MacroTargets, ShoppingListItem};

/// Downloadable snapshot of a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExport {
    pub macro_targets: MacroTargets,
    pub plan: Vec<DailyMealPlan>,
    pub shopping_list: Vec<ShoppingListItem>,
}

impl PlanExport {
    pub fn new(
        macro_targets: MacroTargets,
        plan: Vec<DailyMealPlan>,
        shopping_list: Vec<ShoppingListItem>,
    ) -> Self {
        Self {
            macro_targets,
            plan,
            shopping_list,
        }
    }
}

pub fn plan_to_json(export: &PlanExport) -> Result<String> {
    Ok(serde_json::to_string_pretty(export)?)
}

pub fn plan_from_json(content: &str) -> Result<PlanExport> {
    Ok(serde_json::from_str(content)?)
}

/// Write a plan export as pretty-printed JSON.
pub fn write_plan_json<P: AsRef<Path>>(path: P, export: &PlanExport) -> Result<()> {
    fs::write(path, plan_to_json(export)?)?;
    Ok(())
}

/// Read a plan export written by [`write_plan_json`].
pub fn read_plan_json<P: AsRef<Path>>(path: P) -> Result<PlanExport> {
    let content = fs::read_to_string(path)?;
    plan_from_json(&content)
}
