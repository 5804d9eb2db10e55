use crate::models::{Day, IngredientReference, Macro, MacroProfile};
use crate::scaler::{
    classify_reference, is_noop_factor, ClassificationPolicy, ScalingResult, WeekTotals,
};

fn profile_row(label: &str, profile: &MacroProfile) -> String {
    format!(
        "  {:<10} {:>7.0} kcal | P {:>6.1} | C {:>6.1} | F {:>6.1}",
        label,
        profile.calories(),
        profile.protein(),
        profile.carbs(),
        profile.fat()
    )
}

/// Display the outcome of a scaling run.
pub fn display_scaling_report(result: &ScalingResult) {
    let info = &result.info;

    println!();
    println!("=== Macro Scaling ===");
    println!();
    println!("{}", profile_row("Baseline", &info.baseline_profile));
    println!("{}", profile_row("Target", &info.target_profile));
    println!("{}", profile_row("Scaled", &info.scaled_profile));
    println!();

    println!("--- Factors ---");
    for m in Macro::ALL {
        let factor = info.macro_adjustments.get(m);
        let tag = if is_noop_factor(factor) { "  (in band)" } else { "" };
        println!("  {:<8} x{:.4}{}", m.label(), factor, tag);
    }
    println!();

    if info.per_ingredient_audit.is_empty() {
        println!("No ingredient amounts changed.");
    } else {
        println!("--- Adjustments ({}) ---", info.per_ingredient_audit.len());
        let max_name_len = info
            .per_ingredient_audit
            .iter()
            .map(|a| a.name.len())
            .max()
            .unwrap_or(10);

        for entry in &info.per_ingredient_audit {
            println!(
                "  {:<9} {:<9} {:<width$}  {:>6} -> {:<6} {:<5} [{} x{:.3}]",
                entry.day.label(),
                entry.slot.label(),
                entry.name,
                entry.original_amount,
                entry.new_amount,
                entry.unit,
                entry.category,
                entry.factor,
                width = max_name_len
            );
        }
    }

    if !info.warnings.is_empty() {
        println!();
        println!("--- Warnings ({}) ---", info.warnings.len());
        for w in &info.warnings {
            println!("  ! {}", w);
        }
    }
    println!();
}

/// Display per-day totals and the weekly baseline.
pub fn display_week_totals(totals: &WeekTotals) {
    println!();
    println!("=== Week Totals ({} active days) ===", totals.active_days);
    println!();

    for day in Day::ALL {
        match totals.days.get(&day) {
            Some(day_totals) => println!("{}", profile_row(day.label(), &day_totals.total)),
            None => println!("  {:<10} (no meals)", day.label()),
        }
    }

    println!();
    println!("{}", profile_row("Baseline", &totals.baseline));
    println!();
}

/// Display each reference's caloric shares and category.
pub fn display_classifications(
    references: &[&IngredientReference],
    policy: &dyn ClassificationPolicy,
) {
    if references.is_empty() {
        println!("No references loaded.");
        return;
    }

    println!();
    println!("=== Classification ({} references) ===", references.len());
    println!();

    let max_name_len = references.iter().map(|r| r.name.len()).max().unwrap_or(10);

    for reference in references {
        let c = classify_reference(reference, policy);
        println!(
            "  {:<width$}  P {:>5.1}% | C {:>5.1}% | F {:>5.1}%  -> {}",
            reference.name,
            c.shares.protein * 100.0,
            c.shares.carbs * 100.0,
            c.shares.fat * 100.0,
            c.category,
            width = max_name_len
        );
    }
    println!();
}
