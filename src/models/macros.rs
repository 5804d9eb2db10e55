use std::fmt;

use serde::{Deserialize, Serialize};

/// Calories per gram of protein and carbohydrate (Atwater factor).
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Calories per gram of fat (Atwater factor).
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// One of the three scalable macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macro {
    Protein,
    Carbs,
    Fat,
}

impl Macro {
    /// All macros in tie-break priority order.
    pub const ALL: [Macro; 3] = [Macro::Protein, Macro::Carbs, Macro::Fat];

    #[inline]
    pub fn kcal_per_gram(self) -> f64 {
        match self {
            Macro::Protein => KCAL_PER_GRAM_PROTEIN,
            Macro::Carbs => KCAL_PER_GRAM_CARBS,
            Macro::Fat => KCAL_PER_GRAM_FAT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Macro::Protein => "protein",
            Macro::Carbs => "carbs",
            Macro::Fat => "fat",
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derive calories from grams of macros. Calories are never stored independently.
#[inline]
pub fn derive_calories(protein: f64, carbs: f64, fat: f64) -> f64 {
    (KCAL_PER_GRAM_PROTEIN * protein + KCAL_PER_GRAM_CARBS * carbs + KCAL_PER_GRAM_FAT * fat)
        .round()
}

/// Round to one decimal place.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Serialized form of a macro profile. All three macros are required and unknown
/// keys are rejected. A `calories` value is accepted but re-derived from the macros.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MacroInput {
    #[serde(default, rename = "calories")]
    _calories: Option<f64>,
    protein: f64,
    carbs: f64,
    fat: f64,
}

impl From<MacroInput> for MacroProfile {
    fn from(input: MacroInput) -> Self {
        MacroProfile::new(input.protein, input.carbs, input.fat)
    }
}

/// Daily macro totals in grams, with calories derived as `round(4p + 4c + 9f)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "MacroInput")]
pub struct MacroProfile {
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
}

impl MacroProfile {
    /// Build a profile from grams. Negative inputs are clamped to zero.
    pub fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        let protein = protein.max(0.0);
        let carbs = carbs.max(0.0);
        let fat = fat.max(0.0);
        Self {
            calories: derive_calories(protein, carbs, fat),
            protein,
            carbs,
            fat,
        }
    }

    #[inline]
    pub fn calories(&self) -> f64 {
        self.calories
    }

    #[inline]
    pub fn protein(&self) -> f64 {
        self.protein
    }

    #[inline]
    pub fn carbs(&self) -> f64 {
        self.carbs
    }

    #[inline]
    pub fn fat(&self) -> f64 {
        self.fat
    }

    /// Grams of the given macro.
    pub fn get(&self, m: Macro) -> f64 {
        match m {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    /// Same profile with every macro rounded to one decimal.
    pub fn rounded(&self) -> Self {
        Self::new(round1(self.protein), round1(self.carbs), round1(self.fat))
    }

    /// Element-wise sum; calories re-derived.
    pub fn plus(&self, other: &MacroProfile) -> Self {
        Self::new(
            self.protein + other.protein,
            self.carbs + other.carbs,
            self.fat + other.fat,
        )
    }

    /// Divide every macro by `n`; calories re-derived.
    pub fn divided_by(&self, n: f64) -> Self {
        if n <= 0.0 {
            return Self::default();
        }
        Self::new(self.protein / n, self.carbs / n, self.fat / n)
    }

    pub fn is_zero(&self) -> bool {
        self.protein == 0.0 && self.carbs == 0.0 && self.fat == 0.0
    }
}

impl fmt::Display for MacroProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} kcal, P:{:.1} C:{:.1} F:{:.1}",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

/// Per-macro scale factors. `1.0` means leave the macro alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroAdjustments {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for MacroAdjustments {
    fn default() -> Self {
        Self {
            protein: 1.0,
            carbs: 1.0,
            fat: 1.0,
        }
    }
}

impl MacroAdjustments {
    pub fn get(&self, m: Macro) -> f64 {
        match m {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    pub fn set(&mut self, m: Macro, factor: f64) {
        match m {
            Macro::Protein => self.protein = factor,
            Macro::Carbs => self.carbs = factor,
            Macro::Fat => self.fat = factor,
        }
    }

    /// Factor for an ingredient category; `Balanced` is never scaled.
    pub fn for_category(&self, category: Category) -> f64 {
        category.as_macro().map_or(1.0, |m| self.get(m))
    }

    pub fn is_noop(&self) -> bool {
        Macro::ALL.iter().all(|&m| self.get(m) == 1.0)
    }
}

/// Fraction of an ingredient's calories supplied by each macro.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroShares {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroShares {
    /// Caloric shares from grams. All zero when the grams carry no calories.
    pub fn from_grams(protein: f64, carbs: f64, fat: f64) -> Self {
        let protein_cal = protein * KCAL_PER_GRAM_PROTEIN;
        let carb_cal = carbs * KCAL_PER_GRAM_CARBS;
        let fat_cal = fat * KCAL_PER_GRAM_FAT;
        let total = protein_cal + carb_cal + fat_cal;

        if total <= 0.0 {
            return Self::default();
        }

        Self {
            protein: protein_cal / total,
            carbs: carb_cal / total,
            fat: fat_cal / total,
        }
    }

    pub fn get(&self, m: Macro) -> f64 {
        match m {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.protein == 0.0 && self.carbs == 0.0 && self.fat == 0.0
    }
}

/// Which scale factor an ingredient follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Carbs,
    Fat,
    Balanced,
}

impl Category {
    pub fn as_macro(self) -> Option<Macro> {
        match self {
            Category::Protein => Some(Macro::Protein),
            Category::Carbs => Some(Macro::Carbs),
            Category::Fat => Some(Macro::Fat),
            Category::Balanced => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Protein => "protein",
            Category::Carbs => "carbs",
            Category::Fat => "fat",
            Category::Balanced => "balanced",
        }
    }
}

impl From<Macro> for Category {
    fn from(m: Macro) -> Self {
        match m {
            Macro::Protein => Category::Protein,
            Macro::Carbs => Category::Carbs,
            Macro::Fat => Category::Fat,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
