use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Result, ScaleError};
use crate::models::{Day, MacroAdjustments, MacroProfile, WeekPlan};
use crate::scaler::aggregate::{aggregate_week, DayTotals};
use crate::scaler::classify::{classify_references, ClassificationPolicy, DominantSharePolicy};
use crate::scaler::config::ScalingConfig;
use crate::scaler::gaps::compute_adjustments;
use crate::scaler::rescale::{scale_plan, AuditEntry};
use crate::scaler::snapshot::ReferenceSnapshot;
use crate::scaler::warnings::ScaleWarning;
use crate::store::{PlanProvider, ReferenceProvider};

/// Pipeline stages, in order. Only `Load` talks to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Baseline,
    Gaps,
    Classify,
    Scale,
    Finalize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Baseline => "baseline",
            Stage::Gaps => "gaps",
            Stage::Classify => "classify",
            Stage::Scale => "scale",
            Stage::Finalize => "finalize",
        };
        f.write_str(name)
    }
}

/// Everything a caller needs to explain a scaled plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalingInfo {
    pub baseline_profile: MacroProfile,
    pub target_profile: MacroProfile,
    pub macro_adjustments: MacroAdjustments,
    pub per_ingredient_audit: Vec<AuditEntry>,
    pub warnings: Vec<ScaleWarning>,

    /// Baseline of the scaled plan, after rounding.
    pub scaled_profile: MacroProfile,

    /// Per-day totals of the scaled plan.
    pub day_totals: BTreeMap<Day, DayTotals>,
}

/// The rewritten plan plus its explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalingResult {
    pub scaled_plan: WeekPlan,
    pub info: ScalingInfo,
}

/// Rescales week plans towards a target. Holds no per-run state, so one engine
/// can serve concurrent runs.
#[derive(Debug)]
pub struct ScalingEngine {
    config: ScalingConfig,
    policy: Box<dyn ClassificationPolicy>,
}

impl Default for ScalingEngine {
    fn default() -> Self {
        Self::new(ScalingConfig::default())
    }
}

impl ScalingEngine {
    /// Engine using the dominant-share policy described by `config`.
    pub fn new(config: ScalingConfig) -> Self {
        let policy = DominantSharePolicy {
            threshold: config.dominant_share_threshold,
            tie_break: config.tie_break,
        };
        Self {
            config,
            policy: Box::new(policy),
        }
    }

    /// Replace the classification policy.
    pub fn with_policy(mut self, policy: Box<dyn ClassificationPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Fetch the plan and run the pipeline.
    ///
    /// Fails only when the target or the plan is absent.
    pub fn run(
        &self,
        plan_id: &str,
        target: Option<&MacroProfile>,
        plans: &dyn PlanProvider,
        references: &dyn ReferenceProvider,
    ) -> Result<ScalingResult> {
        debug!(stage = %Stage::Load, plan_id, "fetching plan");
        let target = target.ok_or(ScaleError::MissingTargetProfile)?;
        let plan = plans
            .fetch_plan(plan_id)
            .ok_or_else(|| ScaleError::MissingPlan(plan_id.to_string()))?;

        Ok(self.scale(&plan, target, references))
    }

    /// Run the pipeline on an already fetched plan. `plan` is not modified.
    pub fn scale(
        &self,
        plan: &WeekPlan,
        target: &MacroProfile,
        references: &dyn ReferenceProvider,
    ) -> ScalingResult {
        debug!(stage = %Stage::Load, entries = plan.entry_count(), "resolving references");
        let snapshot = ReferenceSnapshot::resolve(plan, references);
        self.scale_snapshot(plan, target, &snapshot)
    }

    /// Stages after `Load`. Never fails; anomalies become warnings.
    pub fn scale_snapshot(
        &self,
        plan: &WeekPlan,
        target: &MacroProfile,
        snapshot: &ReferenceSnapshot,
    ) -> ScalingResult {
        let mut warnings = Vec::new();

        let totals = aggregate_week(plan, snapshot, &mut warnings);
        debug!(
            stage = %Stage::Baseline,
            active_days = totals.active_days,
            baseline = %totals.baseline,
            "aggregated week"
        );

        let adjustments =
            compute_adjustments(&totals.baseline, target, self.config.tolerance, &mut warnings);
        debug!(
            stage = %Stage::Gaps,
            protein = adjustments.protein,
            carbs = adjustments.carbs,
            fat = adjustments.fat,
            "computed factors"
        );

        let classifications = classify_references(snapshot.references(), self.policy.as_ref());
        debug!(stage = %Stage::Classify, references = classifications.len(), "classified references");

        let (scaled_plan, audit) = scale_plan(plan, snapshot, &classifications, &adjustments);
        debug!(stage = %Stage::Scale, adjusted = audit.len(), "rescaled entries");

        // Scaled totals reuse the same snapshot; their warnings repeat the baseline's.
        let scaled_totals = aggregate_week(&scaled_plan, snapshot, &mut Vec::new());

        for w in &warnings {
            warn!("{}", w);
        }
        info!(
            stage = %Stage::Finalize,
            baseline = %totals.baseline,
            target = %target,
            scaled = %scaled_totals.baseline,
            adjusted = audit.len(),
            warnings = warnings.len(),
            "scaling complete"
        );

        ScalingResult {
            scaled_plan,
            info: ScalingInfo {
                baseline_profile: totals.baseline,
                target_profile: *target,
                macro_adjustments: adjustments,
                per_ingredient_audit: audit,
                warnings,
                scaled_profile: scaled_totals.baseline,
                day_totals: scaled_totals.days,
            },
        }
    }
}
