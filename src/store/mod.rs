mod persistence;
mod tables;

pub use persistence::{
    load_config, load_plans, load_references, load_target, save_plan,
};
pub use tables::{PlanLibrary, ReferenceTable};

use crate::models::{IngredientReference, WeekPlan};

/// Read-only source of ingredient compositions.
///
/// Implementations must tolerate concurrent reads; the engine never writes.
pub trait ReferenceProvider: Sync {
    fn lookup(&self, name: &str) -> Option<IngredientReference>;

    /// Names offered as "did you mean" suggestions for unknown ingredients.
    fn known_names(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Source of week-plan templates keyed by plan id.
pub trait PlanProvider: Sync {
    fn fetch_plan(&self, plan_id: &str) -> Option<WeekPlan>;
}
