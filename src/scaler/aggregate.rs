use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Day, DayPlan, MacroProfile, Meal, MealSlot, WeekPlan};
use crate::scaler::snapshot::ReferenceSnapshot;
use crate::scaler::units::normalize;
use crate::scaler::warnings::ScaleWarning;

/// Macro totals of one day, per meal slot and overall.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DayTotals {
    pub meals: BTreeMap<MealSlot, MacroProfile>,
    pub total: MacroProfile,
}

/// Per-day totals and the weekly baseline.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WeekTotals {
    pub days: BTreeMap<Day, DayTotals>,

    /// Mean daily profile over active days.
    pub baseline: MacroProfile,

    /// Days with at least one non-empty meal slot.
    pub active_days: usize,
}

/// Sum one meal. Macros are rounded to one decimal; calories are derived.
///
/// Entries without a reference or with an invalid amount contribute nothing.
pub fn aggregate_meal(
    meal: &Meal,
    day: Day,
    slot: MealSlot,
    references: &ReferenceSnapshot,
    warnings: &mut Vec<ScaleWarning>,
) -> MacroProfile {
    let (mut protein, mut carbs, mut fat) = (0.0, 0.0, 0.0);

    for entry in &meal.entries {
        if !entry.has_valid_amount() {
            warnings.push(ScaleWarning::InvalidAmount {
                day,
                slot,
                name: entry.name.clone(),
                amount: entry.amount,
            });
            continue;
        }

        let Some(reference) = references.get(&entry.name) else {
            warnings.push(ScaleWarning::MissingIngredientReference {
                day,
                slot,
                name: entry.name.clone(),
                suggestion: references.suggestion(&entry.name).map(str::to_string),
            });
            continue;
        };

        let normalized = normalize(reference, entry.amount, &entry.unit);
        if !normalized.recognized() {
            warnings.push(ScaleWarning::UnrecognizedUnit {
                day,
                slot,
                name: entry.name.clone(),
                unit: normalized.unit.to_string(),
            });
        }

        protein += reference.protein * normalized.multiplier;
        carbs += reference.carbs * normalized.multiplier;
        fat += reference.fat * normalized.multiplier;
    }

    MacroProfile::new(protein, carbs, fat).rounded()
}

/// Sum the meals of one day.
pub fn aggregate_day(
    plan: &DayPlan,
    day: Day,
    references: &ReferenceSnapshot,
    warnings: &mut Vec<ScaleWarning>,
) -> DayTotals {
    let meals: BTreeMap<MealSlot, MacroProfile> = plan
        .meals
        .iter()
        .filter(|(_, meal)| !meal.is_empty())
        .map(|(&slot, meal)| (slot, aggregate_meal(meal, day, slot, references, warnings)))
        .collect();

    let total = meals
        .values()
        .fold(MacroProfile::default(), |acc, m| acc.plus(m))
        .rounded();

    DayTotals { meals, total }
}

/// Aggregate the whole week.
///
/// The baseline is the mean over days that hold at least one entry; empty days are
/// left out of the denominator rather than counted as zero.
pub fn aggregate_week(
    plan: &WeekPlan,
    references: &ReferenceSnapshot,
    warnings: &mut Vec<ScaleWarning>,
) -> WeekTotals {
    let days: BTreeMap<Day, DayTotals> = plan
        .active_days()
        .map(|(day, day_plan)| (day, aggregate_day(day_plan, day, references, warnings)))
        .collect();

    let active_days = days.len();
    let baseline = days
        .values()
        .fold(MacroProfile::default(), |acc, d| acc.plus(&d.total))
        .divided_by(active_days as f64)
        .rounded();

    WeekTotals {
        days,
        baseline,
        active_days,
    }
}
