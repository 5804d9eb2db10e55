use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Category, Day, MacroAdjustments, MacroShares, MealSlot, RoundingClass, WeekPlan};
use crate::scaler::classify::Classification;
use crate::scaler::constants::FACTOR_EPSILON;
use crate::scaler::snapshot::ReferenceSnapshot;
use crate::scaler::units::effective_unit;

/// One rewritten amount and the reason for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    pub day: Day,
    pub slot: MealSlot,
    pub name: String,
    pub unit: String,
    pub original_amount: f64,
    pub new_amount: f64,
    pub factor: f64,
    pub category: Category,
    pub macro_shares: MacroShares,
}

/// Round `amount` to the class's step, never below its floor.
pub fn round_amount(amount: f64, class: RoundingClass) -> f64 {
    let step = class.step();
    ((amount / step).round() * step).max(class.floor())
}

/// Apply `factor` to `amount` and round.
pub fn rescale_amount(amount: f64, factor: f64, class: RoundingClass) -> f64 {
    round_amount(amount * factor, class)
}

#[inline]
pub fn is_noop_factor(factor: f64) -> bool {
    (factor - 1.0).abs() < FACTOR_EPSILON
}

/// Produce a rescaled copy of `plan`.
///
/// Entries whose factor is 1 (balanced ingredients, missing references, macros
/// already in band) are copied untouched, so an in-band plan comes back unchanged.
/// Entries with an invalid amount are copied untouched too.
pub fn scale_plan(
    plan: &WeekPlan,
    references: &ReferenceSnapshot,
    classifications: &HashMap<String, Classification>,
    adjustments: &MacroAdjustments,
) -> (WeekPlan, Vec<AuditEntry>) {
    let mut scaled = plan.clone();
    let mut audit = Vec::new();

    for (day, slot, entry) in scaled.entries_mut() {
        if !entry.has_valid_amount() {
            continue;
        }
        let Some(reference) = references.get(&entry.name) else {
            continue;
        };
        let Some(classification) = classifications.get(&reference.key()) else {
            continue;
        };

        let factor = adjustments.for_category(classification.category);
        if is_noop_factor(factor) {
            continue;
        }

        let unit = effective_unit(&entry.unit, reference);
        let original_amount = entry.amount;
        let new_amount = rescale_amount(original_amount, factor, unit.rounding_class());
        entry.amount = new_amount;

        audit.push(AuditEntry {
            day,
            slot,
            name: entry.name.clone(),
            unit: unit.to_string(),
            original_amount,
            new_amount,
            factor,
            category: classification.category,
            macro_shares: classification.shares,
        });
    }

    (scaled, audit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayPlan, IngredientReference, Meal, PlanEntry, Unit};
    use crate::scaler::classify::{classify_references, DominantSharePolicy};

    #[test]
    fn test_rounding_examples() {
        assert_eq!(rescale_amount(2.0, 1.37, RoundingClass::Discrete), 3.0);
        assert_eq!(rescale_amount(120.0, 1.2, RoundingClass::Weight), 145.0);
        assert_eq!(rescale_amount(150.0, 0.6, RoundingClass::Volume), 90.0);
    }

    #[test]
    fn test_floors() {
        assert_eq!(rescale_amount(1.0, 0.2, RoundingClass::Discrete), 1.0);
        assert_eq!(rescale_amount(10.0, 0.1, RoundingClass::Weight), 5.0);
        assert_eq!(rescale_amount(20.0, 0.1, RoundingClass::Volume), 10.0);
        assert_eq!(rescale_amount(3.0, 0.1, RoundingClass::Unrecognized), 1.0);
    }

    #[test]
    fn test_spoons_and_cups_round_to_whole_units() {
        assert_eq!(rescale_amount(2.0, 1.37, Unit::Tablespoon.rounding_class()), 3.0);
        assert_eq!(rescale_amount(3.0, 0.6, Unit::Teaspoon.rounding_class()), 2.0);
        assert_eq!(rescale_amount(1.0, 0.4, Unit::Cup.rounding_class()), 1.0);
    }

    fn snapshot() -> ReferenceSnapshot {
        ReferenceSnapshot::from_references(vec![
            IngredientReference {
                name: "Chicken".to_string(),
                unit_type: Unit::Grams,
                calories: 165.0,
                protein: 31.0,
                carbs: 0.0,
                fat: 3.6,
            },
            IngredientReference {
                name: "Rice".to_string(),
                unit_type: Unit::Grams,
                calories: 350.0,
                protein: 7.0,
                carbs: 78.0,
                fat: 0.6,
            },
            IngredientReference {
                name: "Bread".to_string(),
                unit_type: Unit::Slice,
                calories: 80.0,
                protein: 3.0,
                carbs: 14.0,
                fat: 1.0,
            },
        ])
    }

    fn plan() -> WeekPlan {
        WeekPlan::default().with_day(
            Day::Monday,
            DayPlan::default().with_meal(
                MealSlot::Dinner,
                Meal::new(vec![
                    PlanEntry::new("Chicken", 120.0, Unit::Grams),
                    PlanEntry::new("Rice", 75.0, Unit::Grams),
                    PlanEntry::new("Bread", 2.0, Unit::parse("")),
                    PlanEntry::new("Mystery", 50.0, Unit::Grams),
                ]),
            ),
        )
    }

    #[test]
    fn test_scale_plan_only_touches_matching_category() {
        let refs = snapshot();
        let classes = classify_references(refs.references(), &DominantSharePolicy::default());
        let adjustments = MacroAdjustments {
            protein: 1.2,
            carbs: 1.0,
            fat: 1.0,
        };

        let source = plan();
        let (scaled, audit) = scale_plan(&source, &refs, &classes, &adjustments);

        let amounts: Vec<f64> = scaled.entries().map(|(_, _, e)| e.amount).collect();
        assert_eq!(amounts, vec![145.0, 75.0, 2.0, 50.0]);
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].name, "Chicken");
        assert_eq!(audit[0].category, Category::Protein);
        assert_eq!(audit[0].original_amount, 120.0);

        // Source template untouched
        assert_eq!(source, plan());
    }

    #[test]
    fn test_blank_unit_rounds_by_reference_unit() {
        let refs = snapshot();
        let classes = classify_references(refs.references(), &DominantSharePolicy::default());
        let adjustments = MacroAdjustments {
            protein: 1.0,
            carbs: 1.37,
            fat: 1.0,
        };

        let (scaled, audit) = scale_plan(&plan(), &refs, &classes, &adjustments);
        let amounts: Vec<f64> = scaled.entries().map(|(_, _, e)| e.amount).collect();

        // rice 75 * 1.37 = 102.75 -> 105 g; bread 2 * 1.37 = 2.74 -> 3 slices
        assert_eq!(amounts, vec![120.0, 105.0, 3.0, 50.0]);
        assert_eq!(audit.len(), 2);
        assert_eq!(audit[1].unit, "slice");
    }

    #[test]
    fn test_spoon_entry_rounds_by_entry_unit() {
        let refs = snapshot();
        let classes = classify_references(refs.references(), &DominantSharePolicy::default());
        let adjustments = MacroAdjustments {
            protein: 1.0,
            carbs: 1.37,
            fat: 1.0,
        };
        let source = WeekPlan::default().with_day(
            Day::Tuesday,
            DayPlan::default().with_meal(
                MealSlot::Breakfast,
                Meal::new(vec![PlanEntry::new("Rice", 2.0, Unit::Tablespoon)]),
            ),
        );

        let (scaled, audit) = scale_plan(&source, &refs, &classes, &adjustments);
        let amounts: Vec<f64> = scaled.entries().map(|(_, _, e)| e.amount).collect();

        assert_eq!(amounts, vec![3.0]);
        assert_eq!(audit[0].unit, "tbsp");
    }

    #[test]
    fn test_invalid_amounts_are_left_alone() {
        let refs = snapshot();
        let classes = classify_references(refs.references(), &DominantSharePolicy::default());
        let adjustments = MacroAdjustments {
            protein: 1.2,
            carbs: 1.0,
            fat: 1.0,
        };
        let source = WeekPlan::default().with_day(
            Day::Monday,
            DayPlan::default().with_meal(
                MealSlot::Dinner,
                Meal::new(vec![
                    PlanEntry::new("Chicken", 120.0, Unit::Grams),
                    PlanEntry::new("Chicken", -40.0, Unit::Grams),
                ]),
            ),
        );

        let (scaled, audit) = scale_plan(&source, &refs, &classes, &adjustments);
        let amounts: Vec<f64> = scaled.entries().map(|(_, _, e)| e.amount).collect();

        assert_eq!(amounts, vec![145.0, -40.0]);
        assert_eq!(audit.len(), 1);
    }
}
