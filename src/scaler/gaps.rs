use serde::Serialize;

use crate::models::{Macro, MacroAdjustments, MacroProfile};
use crate::scaler::warnings::ScaleWarning;

/// Acceptable range around one target macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToleranceBand {
    pub min: f64,
    pub max: f64,
}

impl ToleranceBand {
    pub fn around(target: f64, tolerance: f64) -> Self {
        Self {
            min: target * (1.0 - tolerance),
            max: target * (1.0 + tolerance),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Scale factor that brings `baseline` to the nearest edge of `band`.
///
/// Returns `None` for a zero baseline, which no factor can move.
pub fn macro_factor(baseline: f64, band: &ToleranceBand) -> Option<f64> {
    if baseline <= 0.0 {
        return None;
    }
    if band.contains(baseline) {
        Some(1.0)
    } else if baseline < band.min {
        Some(band.min / baseline)
    } else {
        Some(band.max / baseline)
    }
}

/// Per-macro factors. Calories are not targeted; each macro is handled on its own.
pub fn compute_adjustments(
    baseline: &MacroProfile,
    target: &MacroProfile,
    tolerance: f64,
    warnings: &mut Vec<ScaleWarning>,
) -> MacroAdjustments {
    let mut adjustments = MacroAdjustments::default();

    for nutrient in Macro::ALL {
        let band = ToleranceBand::around(target.get(nutrient), tolerance);
        match macro_factor(baseline.get(nutrient), &band) {
            Some(factor) => adjustments.set(nutrient, factor),
            None => warnings.push(ScaleWarning::ZeroBaselineMacro { nutrient }),
        }
    }

    adjustments
}
