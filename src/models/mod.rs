pub mod ingredient;
pub mod macros;
pub mod plan;

pub use ingredient::{IngredientReference, RoundingClass, Unit};
pub use macros::{Category, Macro, MacroAdjustments, MacroProfile, MacroShares};
pub use plan::{Day, DayPlan, Meal, MealSlot, PlanEntry, WeekPlan};
