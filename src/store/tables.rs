use std::collections::HashMap;

use crate::models::{IngredientReference, WeekPlan};
use crate::store::{PlanProvider, ReferenceProvider};

/// In-memory ingredient reference table keyed by lowercase name.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    references: HashMap<String, IngredientReference>,
}

impl ReferenceTable {
    /// Build a table from a list of references. Last occurrence of a name wins.
    pub fn new(references: Vec<IngredientReference>) -> Self {
        let mut map = HashMap::new();
        for reference in references {
            map.insert(reference.key(), reference);
        }
        Self { references: map }
    }

    /// Get a reference by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&IngredientReference> {
        self.references.get(&name.trim().to_lowercase())
    }

    /// All references, sorted by name.
    pub fn all(&self) -> Vec<&IngredientReference> {
        let mut all: Vec<&IngredientReference> = self.references.values().collect();
        all.sort_by_key(|r| r.key());
        all
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

impl ReferenceProvider for ReferenceTable {
    fn lookup(&self, name: &str) -> Option<IngredientReference> {
        self.get(name).cloned()
    }

    fn known_names(&self) -> Vec<String> {
        self.all().into_iter().map(|r| r.name.clone()).collect()
    }
}

/// In-memory plan templates keyed by plan id.
#[derive(Debug, Clone, Default)]
pub struct PlanLibrary {
    plans: HashMap<String, WeekPlan>,
}

impl PlanLibrary {
    pub fn new(plans: HashMap<String, WeekPlan>) -> Self {
        Self { plans }
    }

    pub fn insert(&mut self, plan_id: impl Into<String>, plan: WeekPlan) {
        self.plans.insert(plan_id.into(), plan);
    }

    /// Plan ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.plans.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl PlanProvider for PlanLibrary {
    fn fetch_plan(&self, plan_id: &str) -> Option<WeekPlan> {
        self.plans.get(plan_id).cloned()
    }
}
