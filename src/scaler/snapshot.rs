use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::models::{IngredientReference, WeekPlan};
use crate::scaler::constants::SUGGESTION_MIN_SCORE;
use crate::store::ReferenceProvider;

/// References resolved for one plan, taken once so later stages never touch the provider.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSnapshot {
    found: HashMap<String, IngredientReference>,
    suggestions: HashMap<String, String>,
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ReferenceSnapshot {
    /// Look up every distinct entry name of `plan` once.
    pub fn resolve(plan: &WeekPlan, provider: &dyn ReferenceProvider) -> Self {
        let mut found = HashMap::new();
        let mut missing = Vec::new();

        for (_, _, entry) in plan.entries() {
            let k = key(&entry.name);
            if found.contains_key(&k) || missing.contains(&k) {
                continue;
            }
            match provider.lookup(&entry.name) {
                Some(reference) => {
                    found.insert(k, reference);
                }
                None => missing.push(k),
            }
        }

        let suggestions = if missing.is_empty() {
            HashMap::new()
        } else {
            let known = provider.known_names();
            missing
                .into_iter()
                .filter_map(|k| best_match(&k, &known).map(|s| (k, s)))
                .collect()
        };

        Self { found, suggestions }
    }

    /// Snapshot over an explicit set of references.
    pub fn from_references(references: impl IntoIterator<Item = IngredientReference>) -> Self {
        Self {
            found: references.into_iter().map(|r| (r.key(), r)).collect(),
            suggestions: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&IngredientReference> {
        self.found.get(&key(name))
    }

    pub fn suggestion(&self, name: &str) -> Option<&str> {
        self.suggestions.get(&key(name)).map(String::as_str)
    }

    pub fn references(&self) -> impl Iterator<Item = &IngredientReference> + '_ {
        self.found.values()
    }
}

/// Closest known name by Jaro-Winkler similarity, if close enough.
fn best_match(name: &str, known: &[String]) -> Option<String> {
    known
        .iter()
        .map(|k| (k, jaro_winkler(&k.to_lowercase(), name)))
        .filter(|(_, score)| *score > SUGGESTION_MIN_SCORE)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k.clone())
}
