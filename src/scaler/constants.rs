/// Relative half-width of the tolerance band around each target macro.
pub const TOLERANCE: f64 = 0.05;

/// Caloric share above which a macro counts as an ingredient's dominant macro.
pub const DOMINANT_SHARE_THRESHOLD: f64 = 0.40;

// ─────────────────────────────────────────────────────────────────────────────
// Unit normalization
// ─────────────────────────────────────────────────────────────────────────────

/// Grams covered by one weight-based reference unit.
pub const GRAMS_PER_REFERENCE: f64 = 100.0;

/// Millilitres covered by one volume-based reference unit (density taken as 1).
pub const ML_PER_REFERENCE: f64 = 100.0;

/// Millilitres in one tablespoon.
pub const TABLESPOON_ML: f64 = 15.0;

/// Millilitres in one teaspoon.
pub const TEASPOON_ML: f64 = 5.0;

/// Millilitres in one cup.
pub const CUP_ML: f64 = 240.0;

// ─────────────────────────────────────────────────────────────────────────────
// Misc
// ─────────────────────────────────────────────────────────────────────────────

/// Factors closer than this to 1.0 are treated as no-ops.
pub const FACTOR_EPSILON: f64 = 1e-9;

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
pub const SUGGESTION_MIN_SCORE: f64 = 0.85;
