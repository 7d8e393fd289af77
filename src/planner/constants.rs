/// Shortest trip the planner accepts, in days.
pub const MIN_TRIP_LENGTH: u8 = 1;

/// Longest trip the planner accepts, in days.
pub const MAX_TRIP_LENGTH: u8 = 7;

/// Trip length a fresh planning session starts with.
pub const DEFAULT_TRIP_LENGTH: u8 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Goal recommendation thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Grams of protein per pouch that qualify for the high-protein goal.
pub const HIGH_PROTEIN_MIN_PROTEIN: f64 = 25.0;

/// Maximum calories per pouch offered under the lightweight goal.
pub const LIGHTWEIGHT_MAX_CALORIES: f64 = 420.0;

// ─────────────────────────────────────────────────────────────────────────────
// Shop calorie slider
// ─────────────────────────────────────────────────────────────────────────────

/// Lower bound of the default calorie filter.
pub const DEFAULT_MIN_CALORIES: f64 = 200.0;

/// Upper bound of the default calorie filter.
pub const DEFAULT_MAX_CALORIES: f64 = 600.0;
