//! Final risk report assembly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::patient::Patient;
use crate::risk::RiskLevel;

/// Risk report returned to callers.
///
/// Serialises as `{firstName, lastName, age, level}` with `level` rendered as its label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub level: RiskLevel,
}

/// Combine a patient's identity with the classifier's verdict.
///
/// `today` is the evaluation date used to derive the age.
pub fn assemble(patient: &Patient, level: RiskLevel, today: NaiveDate) -> Report {
    Report {
        first_name: patient.first_name.as_str().to_owned(),
        last_name: patient.last_name.as_str().to_owned(),
        age: patient.age_at(today),
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::Gender;
    use dra_types::PatientId;

    #[test]
    fn assemble_copies_names_and_derives_age() {
        let patient = Patient::new(
            PatientId::new(1).unwrap(),
            "jane",
            "doe",
            NaiveDate::from_ymd_opt(1980, 1, 25).unwrap(),
            Gender::Female,
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 24).unwrap();

        let report = assemble(&patient, RiskLevel::Borderline, today);

        assert_eq!(report.first_name, "jane");
        assert_eq!(report.last_name, "doe");
        assert_eq!(report.age, 43);
        assert_eq!(report.level, RiskLevel::Borderline);
    }

    #[test]
    fn report_serialises_level_as_label() {
        let report = Report {
            first_name: "john".into(),
            last_name: "doe".into(),
            age: 45,
            level: RiskLevel::InDanger,
        };
        let json = serde_json::to_value(&report).expect("serialisable report");
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "john",
                "lastName": "doe",
                "age": 45,
                "level": "In danger"
            })
        );
    }
}
