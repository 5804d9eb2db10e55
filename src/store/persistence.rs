use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, ScaleError};
use crate::models::{IngredientReference, MacroProfile, WeekPlan};
use crate::scaler::ScalingConfig;
use crate::store::{PlanLibrary, ReferenceTable};

/// Load ingredient references from a JSON array or, for `.csv` paths, a CSV file
/// with a `name,unit_type,calories,protein,carbs,fat` header.
///
/// Duplicate names (case-insensitive) keep the last occurrence.
pub fn load_references<P: AsRef<Path>>(path: P) -> Result<ReferenceTable> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let references: Vec<IngredientReference> = if is_csv {
        let mut reader = csv::Reader::from_path(path)?;
        reader
            .deserialize()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };

    if let Some(bad) = references.iter().find(|r| !r.is_valid()) {
        return Err(ScaleError::InvalidInput(format!(
            "reference '{}' has a negative macro value",
            bad.name
        )));
    }

    debug!(count = references.len(), path = %path.display(), "loaded references");
    let table = ReferenceTable::new(references);
    if table.is_empty() {
        warn!(path = %path.display(), "no ingredient references loaded");
    }
    Ok(table)
}

/// Load plan templates from a JSON object mapping plan id to week plan.
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<PlanLibrary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let plans: HashMap<String, WeekPlan> = serde_json::from_str(&content)?;

    for (plan_id, plan) in &plans {
        if let Some((day, slot, entry)) = plan
            .entries()
            .find(|(_, _, e)| !e.has_valid_amount())
        {
            return Err(ScaleError::InvalidInput(format!(
                "plan '{}' {}/{}: '{}' has invalid amount {}",
                plan_id, day, slot, entry.name, entry.amount
            )));
        }
    }

    let library = PlanLibrary::new(plans);
    if library.is_empty() {
        warn!(path = %path.display(), "no plan templates loaded");
    }
    Ok(library)
}

/// Load a target profile. Protein, carbs and fat are all required; any stored
/// calorie figure is ignored and re-derived.
pub fn load_target<P: AsRef<Path>>(path: P) -> Result<MacroProfile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a scaling configuration; missing fields take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ScalingConfig> {
    let content = fs::read_to_string(path)?;
    let config: ScalingConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Write a week plan as pretty JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &WeekPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
