use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::scaler::{AuditEntry, ScalingResult};

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write the per-ingredient audit to a CSV file.
pub fn write_audit_csv(audit: &[AuditEntry], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "day",
        "slot",
        "name",
        "unit",
        "original_amount",
        "new_amount",
        "factor",
        "category",
        "protein_share",
        "carbs_share",
        "fat_share",
    ])?;

    for entry in audit {
        wtr.write_record([
            entry.day.to_string(),
            entry.slot.to_string(),
            entry.name.clone(),
            entry.unit.clone(),
            format!("{}", entry.original_amount),
            format!("{}", entry.new_amount),
            format!("{:.4}", entry.factor),
            entry.category.to_string(),
            format!("{:.3}", entry.macro_shares.protein),
            format!("{:.3}", entry.macro_shares.carbs),
            format!("{:.3}", entry.macro_shares.fat),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the scaled plan and its scaling info as pretty JSON.
pub fn write_result_json(result: &ScalingResult, path: &Path) -> Result<()> {
    let adjustments = &result.info.macro_adjustments;
    let json = serde_json::json!({
        "scaled_plan": result.scaled_plan,
        "info": {
            "baseline_profile": result.info.baseline_profile,
            "target_profile": result.info.target_profile,
            "scaled_profile": result.info.scaled_profile,
            "macro_adjustments": {
                "protein": truncate(adjustments.protein, 5),
                "carbs": truncate(adjustments.carbs, 5),
                "fat": truncate(adjustments.fat, 5),
            },
            "per_ingredient_audit": result.info.per_ingredient_audit,
            "warnings": result.info.warnings,
            "day_totals": result.info.day_totals,
        },
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}
