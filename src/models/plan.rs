use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ingredient::Unit;

/// Day-of-week key of a week plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Meal-slot key within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn blank_unit() -> Unit {
    Unit::Unrecognized(String::new())
}

/// One ingredient line in a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub name: String,

    pub amount: f64,

    /// Blank means "in the reference's own unit".
    #[serde(default = "blank_unit")]
    pub unit: Unit,
}

impl PlanEntry {
    pub fn new(name: impl Into<String>, amount: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
        }
    }

    /// Finite and non-negative.
    pub fn has_valid_amount(&self) -> bool {
        self.amount.is_finite() && self.amount >= 0.0
    }
}

/// Ordered ingredient lines under one meal slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meal {
    pub entries: Vec<PlanEntry>,
}

impl Meal {
    pub fn new(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Meals of one day, keyed by slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayPlan {
    pub meals: BTreeMap<MealSlot, Meal>,
}

impl DayPlan {
    pub fn with_meal(mut self, slot: MealSlot, meal: Meal) -> Self {
        self.meals.insert(slot, meal);
        self
    }

    pub fn meal(&self, slot: MealSlot) -> Option<&Meal> {
        self.meals.get(&slot)
    }

    /// True when no slot holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.meals.values().all(Meal::is_empty)
    }
}

/// A week of day plans. Days that are absent or hold no entries are "empty days".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlan {
    pub days: BTreeMap<Day, DayPlan>,
}

impl WeekPlan {
    pub fn with_day(mut self, day: Day, plan: DayPlan) -> Self {
        self.days.insert(day, plan);
        self
    }

    pub fn day(&self, day: Day) -> Option<&DayPlan> {
        self.days.get(&day)
    }

    /// Days holding at least one entry, in week order.
    pub fn active_days(&self) -> impl Iterator<Item = (Day, &DayPlan)> + '_ {
        Day::ALL
            .into_iter()
            .filter_map(|day| self.days.get(&day).map(|plan| (day, plan)))
            .filter(|(_, plan)| !plan.is_empty())
    }

    /// Every entry with its location, in week and slot order.
    pub fn entries(&self) -> impl Iterator<Item = (Day, MealSlot, &PlanEntry)> + '_ {
        self.days.iter().flat_map(|(&day, plan)| {
            plan.meals
                .iter()
                .flat_map(move |(&slot, meal)| meal.entries.iter().map(move |e| (day, slot, e)))
        })
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = (Day, MealSlot, &mut PlanEntry)> + '_ {
        self.days.iter_mut().flat_map(|(&day, plan)| {
            plan.meals.iter_mut().flat_map(move |(&slot, meal)| {
                meal.entries.iter_mut().map(move |e| (day, slot, e))
            })
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> WeekPlan {
        let monday = DayPlan::default()
            .with_meal(
                MealSlot::Breakfast,
                Meal::new(vec![PlanEntry::new("Egg", 2.0, Unit::Piece)]),
            )
            .with_meal(
                MealSlot::Dinner,
                Meal::new(vec![
                    PlanEntry::new("Rice", 75.0, Unit::Grams),
                    PlanEntry::new("Chicken", 120.0, Unit::Grams),
                ]),
            );
        let tuesday = DayPlan::default().with_meal(MealSlot::Lunch, Meal::default());

        WeekPlan::default()
            .with_day(Day::Monday, monday)
            .with_day(Day::Tuesday, tuesday)
    }

    #[test]
    fn test_active_days_skip_empty() {
        let plan = sample_plan();
        let active: Vec<Day> = plan.active_days().map(|(d, _)| d).collect();
        assert_eq!(active, vec![Day::Monday]);
    }

    #[test]
    fn test_entries_in_order() {
        let plan = sample_plan();
        let names: Vec<&str> = plan.entries().map(|(_, _, e)| e.name.as_str()).collect();
        assert_eq!(names, vec!["Egg", "Rice", "Chicken"]);
        assert_eq!(plan.entry_count(), 3);
    }

    #[test]
    fn test_entries_mut_rewrites_in_place() {
        let mut plan = sample_plan();
        for (_, _, entry) in plan.entries_mut() {
            entry.amount *= 2.0;
        }
        let egg = &plan.day(Day::Monday).unwrap().meal(MealSlot::Breakfast).unwrap().entries[0];
        assert_eq!(egg.amount, 4.0);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "monday": {"breakfast": [{"name": "Egg", "amount": 2, "unit": "stuk"}]},
            "sunday": {}
        }"#;
        let plan: WeekPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.entry_count(), 1);
        assert!(plan.day(Day::Sunday).unwrap().is_empty());

        let (_, _, entry) = plan.entries().next().unwrap();
        assert_eq!(entry.unit, Unit::Piece);
    }

    #[test]
    fn test_unknown_day_key_rejected() {
        let json = r#"{"funday": {}}"#;
        assert!(serde_json::from_str::<WeekPlan>(json).is_err());
    }

    #[test]
    fn test_missing_unit_is_blank() {
        let entry: PlanEntry = serde_json::from_str(r#"{"name": "Apple", "amount": 1}"#).unwrap();
        assert!(entry.unit.is_blank());
    }
}
