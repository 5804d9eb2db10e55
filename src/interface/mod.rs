pub mod export;
pub mod render;

pub use export::{write_audit_csv, write_result_json};
pub use render::{display_classifications, display_scaling_report, display_week_totals};
