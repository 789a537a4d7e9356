/// Calories per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// Calories per gram of carbohydrate.
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Calories per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Cooking preference thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Longest cooking time accepted by the "quick" preference.
pub const QUICK_PREP_MINUTES: u32 = 15;

/// Longest cooking time accepted by the "moderate" preference.
pub const MODERATE_PREP_MINUTES: u32 = 30;

// ─────────────────────────────────────────────────────────────────────────────
// Selection and serving adjustment
// ─────────────────────────────────────────────────────────────────────────────

/// Score multiplier for protein foods with non-zero protein.
pub const PROTEIN_CATEGORY_MULT: f64 = 2.0;

/// Score multiplier for carb foods with non-zero carbs.
pub const CARB_CATEGORY_MULT: f64 = 2.0;

/// Score multiplier for vegetables with recorded fiber.
pub const VEGETABLE_CATEGORY_MULT: f64 = 1.5;

/// Smallest serving as a fraction of the base serving.
pub const SERVING_CLAMP_MIN: f64 = 0.7;

/// Largest serving as a fraction of the base serving.
pub const SERVING_CLAMP_MAX: f64 = 1.5;

// ─────────────────────────────────────────────────────────────────────────────
// Schedule and rotation
// ─────────────────────────────────────────────────────────────────────────────

/// Days in a generated plan.
pub const DEFAULT_PLAN_DAYS: usize = 3;

/// Longest plan accepted, one year.
pub const MAX_PLAN_DAYS: usize = 366;

/// Lunch and dinner.
pub const MEALS_PER_DAY: usize = 2;

/// Labels for each meal slot of a day, in order.
pub const MEAL_NAMES: [&str; MEALS_PER_DAY] = ["Lunch", "Dinner"];

/// Recently used proteins kept out of selection.
pub const PROTEIN_WINDOW: usize = 2;

/// Recently used carbs kept out of selection.
pub const CARB_WINDOW: usize = 2;

/// Recently used vegetables kept out of selection.
pub const VEGETABLE_WINDOW: usize = 4;

/// Fixed preparation time added to the longest component cooking time.
pub const PREP_OVERHEAD_MINUTES: u32 = 5;

/// Method label used when a food lists no cooking methods.
pub const FALLBACK_METHOD: &str = "Prepared";

/// Unit for shopping list quantities.
pub const SHOPPING_UNIT: &str = "g";
