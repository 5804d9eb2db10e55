pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod scaler;
pub mod store;

pub use error::{Result, ScaleError};
pub use models::{IngredientReference, MacroProfile, WeekPlan};
pub use scaler::{ScalingEngine, ScalingResult};
