use std::fmt;

use serde::Serialize;

use crate::models::{Day, Macro, MealSlot};

/// A non-fatal anomaly recorded during a scaling run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaleWarning {
    /// The entry contributes zero macros and is never rescaled.
    MissingIngredientReference {
        day: Day,
        slot: MealSlot,
        name: String,
        suggestion: Option<String>,
    },

    /// The macro's factor is forced to 1.
    ZeroBaselineMacro { nutrient: Macro },

    /// The entry is normalized as grams and rounded to whole units.
    UnrecognizedUnit {
        day: Day,
        slot: MealSlot,
        name: String,
        unit: String,
    },

    /// The amount is NaN, infinite or negative. The entry contributes zero
    /// macros and is never rescaled.
    InvalidAmount {
        day: Day,
        slot: MealSlot,
        name: String,
        amount: f64,
    },
}

impl fmt::Display for ScaleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleWarning::MissingIngredientReference {
                day,
                slot,
                name,
                suggestion,
            } => {
                write!(f, "{day}/{slot}: no reference found for '{name}'")?;
                if let Some(s) = suggestion {
                    write!(f, " (did you mean '{s}'?)")?;
                }
                Ok(())
            }
            ScaleWarning::ZeroBaselineMacro { nutrient } => {
                write!(f, "cannot scale a zero baseline macro: {nutrient}")
            }
            ScaleWarning::UnrecognizedUnit {
                day,
                slot,
                name,
                unit,
            } => write!(
                f,
                "{day}/{slot}: unrecognized unit '{unit}' for '{name}', treated as grams"
            ),
            ScaleWarning::InvalidAmount {
                day,
                slot,
                name,
                amount,
            } => write!(f, "{day}/{slot}: invalid amount {amount} for '{name}', skipped"),
        }
    }
}
