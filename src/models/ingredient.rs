use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::macros::MacroShares;

/// A quantity unit, as written in a plan entry or a reference `unit_type`.
///
/// Parsing is lenient: the `per_` prefix used by reference tables is dropped and a
/// few Dutch kitchen words are accepted next to the English ones. Anything else is
/// kept verbatim as [`Unit::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    Grams,
    Milliliters,
    Piece,
    Slice,
    Tablespoon,
    Teaspoon,
    Cup,
    Unrecognized(String),
}

impl Unit {
    pub fn parse(raw: &str) -> Unit {
        let lowered = raw.trim().to_lowercase();
        let name = lowered.strip_prefix("per_").unwrap_or(&lowered);

        match name {
            "100g" | "g" | "gr" | "gram" | "grams" => Unit::Grams,
            "100ml" | "ml" | "milliliter" | "milliliters" => Unit::Milliliters,
            "piece" | "pieces" | "stuk" | "stuks" | "pc" => Unit::Piece,
            "slice" | "slices" | "plakje" | "plakjes" => Unit::Slice,
            "tbsp" | "tablespoon" | "el" | "eetlepel" => Unit::Tablespoon,
            "tsp" | "teaspoon" | "tl" | "theelepel" => Unit::Teaspoon,
            "cup" | "cups" | "kopje" => Unit::Cup,
            _ => Unit::Unrecognized(raw.trim().to_string()),
        }
    }

    /// Canonical spelling used when writing plans back out.
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Grams => "g",
            Unit::Milliliters => "ml",
            Unit::Piece => "piece",
            Unit::Slice => "slice",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::Cup => "cup",
            Unit::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Unit::Unrecognized(_))
    }

    /// An empty unit string, meaning "use the reference's unit".
    pub fn is_blank(&self) -> bool {
        matches!(self, Unit::Unrecognized(raw) if raw.is_empty())
    }

    pub fn rounding_class(&self) -> RoundingClass {
        match self {
            Unit::Piece | Unit::Slice | Unit::Tablespoon | Unit::Teaspoon | Unit::Cup => {
                RoundingClass::Discrete
            }
            Unit::Grams => RoundingClass::Weight,
            Unit::Milliliters => RoundingClass::Volume,
            Unit::Unrecognized(_) => RoundingClass::Unrecognized,
        }
    }
}

impl From<String> for Unit {
    fn from(raw: String) -> Self {
        Unit::parse(&raw)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rescaled amount is rounded, and the smallest amount it may drop to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingClass {
    Discrete,
    Weight,
    Volume,
    Unrecognized,
}

impl RoundingClass {
    /// Rounding step.
    pub fn step(self) -> f64 {
        match self {
            RoundingClass::Discrete | RoundingClass::Unrecognized => 1.0,
            RoundingClass::Weight => 5.0,
            RoundingClass::Volume => 10.0,
        }
    }

    /// Minimum amount after rescaling.
    pub fn floor(self) -> f64 {
        self.step()
    }
}

/// Macro composition of one ingredient per reference unit (100 g, one piece, 100 ml...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientReference {
    pub name: String,

    pub unit_type: Unit,

    /// Informational only; totals always derive calories from the macros.
    #[serde(default)]
    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fat: f64,
}

impl IngredientReference {
    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    pub fn shares(&self) -> MacroShares {
        MacroShares::from_grams(self.protein, self.carbs, self.fat)
    }

    /// Non-negative composition.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0 && self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0
    }
}
