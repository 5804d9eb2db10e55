use std::collections::HashMap;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::models::{Category, IngredientReference, Macro, MacroShares};
use crate::scaler::constants::DOMINANT_SHARE_THRESHOLD;

/// How to choose when more than one macro clears the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Largest share wins; exact ties go protein, then carbs, then fat.
    #[default]
    HighestShare,

    /// First of protein, carbs, fat above the threshold wins.
    FixedOrder,
}

/// Decides which scale factor an ingredient follows, from its caloric shares.
pub trait ClassificationPolicy: Debug + Send + Sync {
    fn classify(&self, shares: &MacroShares) -> Category;
}

/// Single dominant-macro heuristic.
///
/// An ingredient whose calories are spread over two macros without either
/// exceeding the threshold is `Balanced` and never rescaled, even when it would
/// help close a gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantSharePolicy {
    pub threshold: f64,
    pub tie_break: TieBreak,
}

impl Default for DominantSharePolicy {
    fn default() -> Self {
        Self {
            threshold: DOMINANT_SHARE_THRESHOLD,
            tie_break: TieBreak::HighestShare,
        }
    }
}

impl ClassificationPolicy for DominantSharePolicy {
    fn classify(&self, shares: &MacroShares) -> Category {
        let mut above = Macro::ALL
            .into_iter()
            .filter(|&m| shares.get(m) > self.threshold);

        let dominant = match self.tie_break {
            TieBreak::FixedOrder => above.next(),
            TieBreak::HighestShare => above.fold(None, |best: Option<Macro>, m| match best {
                Some(b) if shares.get(b) >= shares.get(m) => Some(b),
                _ => Some(m),
            }),
        };

        dominant.map_or(Category::Balanced, Category::from)
    }
}

/// Category of one reference along with the shares that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub shares: MacroShares,
}

/// Classify one reference.
pub fn classify_reference(
    reference: &IngredientReference,
    policy: &dyn ClassificationPolicy,
) -> Classification {
    let shares = reference.shares();
    Classification {
        category: policy.classify(&shares),
        shares,
    }
}

/// Classify each distinct reference, keyed by lowercase name.
pub fn classify_references<'a, I>(
    references: I,
    policy: &dyn ClassificationPolicy,
) -> HashMap<String, Classification>
where
    I: IntoIterator<Item = &'a IngredientReference>,
{
    references
        .into_iter()
        .map(|r| (r.key(), classify_reference(r, policy)))
        .collect()
}
