//! Constants used throughout the DRA core crate.
//!
//! Risk thresholds live here so the classification rules read as named comparisons.

/// Default clinical trigger vocabulary, lowercase, in scan order.
pub const DEFAULT_TRIGGER_TERMS: [&str; 11] = [
    "hémoglobine a1c",
    "microalbumine",
    "taille",
    "poids",
    "fumeur",
    "anormal",
    "cholestérol",
    "vertige",
    "rechute",
    "réaction",
    "anticorps",
];

/// Patients strictly older than this get the age-gated rules.
pub const AGE_THRESHOLD: u32 = 30;

/// Exact trigger count that makes a patient borderline.
pub const BORDERLINE_TRIGGER_COUNT: usize = 2;

/// Exclusive lower bound of the age-gated danger window.
pub const DANGER_TRIGGER_MIN: usize = 3;

/// Inclusive upper bound of the age-gated danger window.
pub const DANGER_TRIGGER_MAX: usize = 6;

/// Exact trigger count that puts a male patient in danger at any age.
pub const MALE_DANGER_TRIGGER_COUNT: usize = 3;

/// Exact trigger count that puts a female patient in danger at any age.
pub const FEMALE_DANGER_TRIGGER_COUNT: usize = 4;
