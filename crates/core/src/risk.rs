//! Diabetes risk classification.
//!
//! Rules are grouped into severity tiers and checked from most to least severe; the first tier
//! with a matching rule wins. Within a tier the age-gated rule and the gender-specific rule are
//! alternatives, so gender thresholds apply at any age.
//!
//! | Tier        | Age > 30            | Male        | Female      |
//! |-------------|---------------------|-------------|-------------|
//! | In danger   | 3 < count <= 6      | count == 3  | count == 4  |
//! | Early onset | count > 6           | count > 3   | count > 4   |
//!
//! Failing both tiers, exactly two triggers is `Borderline` and anything else is `None`.

use serde::{Deserialize, Serialize};

use crate::constants::{
    AGE_THRESHOLD, BORDERLINE_TRIGGER_COUNT, DANGER_TRIGGER_MAX, DANGER_TRIGGER_MIN,
    FEMALE_DANGER_TRIGGER_COUNT, MALE_DANGER_TRIGGER_COUNT,
};
use crate::patient::Gender;

/// Risk verdict, ordered by increasing severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "None")]
    None,
    #[serde(rename = "Borderline")]
    Borderline,
    #[serde(rename = "In danger")]
    InDanger,
    #[serde(rename = "Early onset")]
    EarlyOnset,
}

impl RiskLevel {
    /// Human-readable label shown to clinicians.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::None => "None",
            RiskLevel::Borderline => "Borderline",
            RiskLevel::InDanger => "In danger",
            RiskLevel::EarlyOnset => "Early onset",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a patient from age, gender and distinct trigger count.
pub fn classify(age: u32, gender: Gender, trigger_count: usize) -> RiskLevel {
    if is_in_danger(age, gender, trigger_count) {
        return RiskLevel::InDanger;
    }
    if is_early_onset(age, gender, trigger_count) {
        return RiskLevel::EarlyOnset;
    }
    if trigger_count == BORDERLINE_TRIGGER_COUNT {
        return RiskLevel::Borderline;
    }
    RiskLevel::None
}

fn is_in_danger(age: u32, gender: Gender, count: usize) -> bool {
    let age_gated =
        age > AGE_THRESHOLD && count > DANGER_TRIGGER_MIN && count <= DANGER_TRIGGER_MAX;
    let by_gender = match gender {
        Gender::Male => count == MALE_DANGER_TRIGGER_COUNT,
        Gender::Female => count == FEMALE_DANGER_TRIGGER_COUNT,
    };
    age_gated || by_gender
}

fn is_early_onset(age: u32, gender: Gender, count: usize) -> bool {
    let age_gated = age > AGE_THRESHOLD && count > DANGER_TRIGGER_MAX;
    let by_gender = match gender {
        Gender::Male => count > MALE_DANGER_TRIGGER_COUNT,
        Gender::Female => count > FEMALE_DANGER_TRIGGER_COUNT,
    };
    age_gated || by_gender
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENDERS: [Gender; 2] = [Gender::Male, Gender::Female];

    #[test]
    fn fewer_than_two_triggers_is_none() {
        for gender in GENDERS {
            for age in [0, 25, 30, 31, 80] {
                assert_eq!(classify(age, gender, 0), RiskLevel::None);
                assert_eq!(classify(age, gender, 1), RiskLevel::None);
            }
        }
    }

    #[test]
    fn two_triggers_is_borderline() {
        for gender in GENDERS {
            assert_eq!(classify(25, gender, 2), RiskLevel::Borderline);
            assert_eq!(classify(45, gender, 2), RiskLevel::Borderline);
        }
    }

    #[test]
    fn male_with_three_triggers_is_in_danger_at_any_age() {
        for age in [18, 25, 30, 31, 45] {
            assert_eq!(classify(age, Gender::Male, 3), RiskLevel::InDanger);
        }
    }

    #[test]
    fn female_with_four_triggers_is_in_danger_at_any_age() {
        for age in [18, 25, 30, 31, 45] {
            assert_eq!(classify(age, Gender::Female, 4), RiskLevel::InDanger);
        }
    }

    #[test]
    fn young_female_with_three_triggers_is_none() {
        assert_eq!(classify(25, Gender::Female, 3), RiskLevel::None);
    }

    #[test]
    fn over_thirty_danger_window_is_inclusive_of_six() {
        for gender in GENDERS {
            for count in 4..=6 {
                assert_eq!(classify(31, gender, count), RiskLevel::InDanger);
            }
            assert_eq!(classify(31, gender, 7), RiskLevel::EarlyOnset);
        }
    }

    #[test]
    fn over_thirty_with_many_triggers_is_early_onset() {
        for gender in GENDERS {
            assert_eq!(classify(35, gender, 7), RiskLevel::EarlyOnset);
            assert_eq!(classify(44, gender, 9), RiskLevel::EarlyOnset);
        }
    }

    #[test]
    fn gender_thresholds_give_early_onset_when_not_over_thirty() {
        assert_eq!(classify(30, Gender::Male, 4), RiskLevel::EarlyOnset);
        assert_eq!(classify(22, Gender::Male, 6), RiskLevel::EarlyOnset);
        assert_eq!(classify(30, Gender::Female, 5), RiskLevel::EarlyOnset);
        assert_eq!(classify(22, Gender::Female, 11), RiskLevel::EarlyOnset);
    }

    #[test]
    fn female_over_thirty_with_five_triggers_stays_in_danger() {
        assert_eq!(classify(44, Gender::Female, 5), RiskLevel::InDanger);
    }

    #[test]
    fn labels_match_display_strings() {
        assert_eq!(RiskLevel::None.to_string(), "None");
        assert_eq!(RiskLevel::Borderline.to_string(), "Borderline");
        assert_eq!(RiskLevel::InDanger.to_string(), "In danger");
        assert_eq!(RiskLevel::EarlyOnset.to_string(), "Early onset");
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(RiskLevel::None < RiskLevel::Borderline);
        assert!(RiskLevel::Borderline < RiskLevel::InDanger);
        assert!(RiskLevel::InDanger < RiskLevel::EarlyOnset);
    }
}
