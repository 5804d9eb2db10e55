pub mod aggregate;
pub mod classify;
pub mod config;
pub mod constants;
pub mod gaps;
pub mod pipeline;
pub mod rescale;
pub mod snapshot;
pub mod units;
pub mod warnings;

pub use aggregate::{aggregate_day, aggregate_meal, aggregate_week, DayTotals, WeekTotals};
pub use classify::{
    classify_reference, classify_references, Classification, ClassificationPolicy,
    DominantSharePolicy, TieBreak,
};
pub use config::ScalingConfig;
pub use constants::*;
pub use gaps::{compute_adjustments, macro_factor, ToleranceBand};
pub use pipeline::{ScalingEngine, ScalingInfo, ScalingResult, Stage};
pub use rescale::{is_noop_factor, rescale_amount, round_amount, scale_plan, AuditEntry};
pub use snapshot::ReferenceSnapshot;
pub use units::{normalize, unit_multiplier, Normalized};
pub use warnings::ScaleWarning;
