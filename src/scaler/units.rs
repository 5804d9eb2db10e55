use crate::models::{IngredientReference, Unit};
use crate::scaler::constants::*;

/// Result of normalizing an entry's amount against its reference unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// `contribution = reference_value * multiplier`
    pub multiplier: f64,

    /// Unit actually used: the entry's, or the reference's when the entry has none.
    pub unit: Unit,
}

impl Normalized {
    pub fn recognized(&self) -> bool {
        self.unit.is_recognized()
    }
}

/// Unit an entry is measured in. A blank entry unit falls back to the reference's.
pub fn effective_unit(entry_unit: &Unit, reference: &IngredientReference) -> Unit {
    if entry_unit.is_blank() {
        reference.unit_type.clone()
    } else {
        entry_unit.clone()
    }
}

/// Multiplier for `amount` of `unit`.
///
/// Unrecognized units are treated as grams.
pub fn unit_multiplier(amount: f64, unit: &Unit) -> f64 {
    match unit {
        Unit::Grams => amount / GRAMS_PER_REFERENCE,
        Unit::Piece | Unit::Slice => amount,
        Unit::Milliliters => amount / ML_PER_REFERENCE,
        Unit::Tablespoon => amount * TABLESPOON_ML / ML_PER_REFERENCE,
        Unit::Teaspoon => amount * TEASPOON_ML / ML_PER_REFERENCE,
        Unit::Cup => amount * CUP_ML / ML_PER_REFERENCE,
        Unit::Unrecognized(_) => amount / GRAMS_PER_REFERENCE,
    }
}

/// Normalize `amount` of `entry_unit` against `reference`.
pub fn normalize(reference: &IngredientReference, amount: f64, entry_unit: &Unit) -> Normalized {
    let unit = effective_unit(entry_unit, reference);
    Normalized {
        multiplier: unit_multiplier(amount, &unit),
        unit,
    }
}
