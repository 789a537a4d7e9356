use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::*;

/// Runtime knobs for plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub days: usize,
    pub serving_clamp_min: f64,
    pub serving_clamp_max: f64,
    pub protein_window: usize,
    pub carb_window: usize,
    pub vegetable_window: usize,
    pub prep_overhead_minutes: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_PLAN_DAYS,
            serving_clamp_min: SERVING_CLAMP_MIN,
            serving_clamp_max: SERVING_CLAMP_MAX,
            protein_window: PROTEIN_WINDOW,
            carb_window: CARB_WINDOW,
            vegetable_window: VEGETABLE_WINDOW,
            prep_overhead_minutes: PREP_OVERHEAD_MINUTES,
        }
    }
}

impl PlanConfig {
    /// Total meal slots in the plan.
    pub fn total_meals(&self) -> usize {
        self.days.saturating_mul(MEALS_PER_DAY)
    }

    pub fn validate(&self) -> Result<()> {
        if self.days == 0 || self.days > MAX_PLAN_DAYS {
            return Err(PlannerError::InvalidInput(format!(
                "Plan must cover 1 to {} days (got {})",
                MAX_PLAN_DAYS, self.days
            )));
        }

        if !(self.serving_clamp_min > 0.0 && self.serving_clamp_min <= self.serving_clamp_max) {
            return Err(PlannerError::InvalidInput(format!(
                "Serving clamp must satisfy 0 < min <= max (got {} .. {})",
                self.serving_clamp_min, self.serving_clamp_max
            )));
        }

        Ok(())
    }
}
