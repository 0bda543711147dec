//! Practitioner note as handed over by the note collaborator.

use chrono::NaiveDateTime;
use dra_types::PatientId;
use serde::{Deserialize, Serialize};

/// A free-text clinical note about one patient.
///
/// `report` carries the note body. It may be absent or empty; such notes simply contribute no
/// triggers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub patient_id: PatientId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practitioner_name: Option<String>,
    #[serde(default)]
    pub report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDateTime>,
}

impl Note {
    pub fn new(patient_id: PatientId, report: Option<String>) -> Self {
        Self {
            id: None,
            patient_id,
            practitioner_name: None,
            report,
            created: None,
        }
    }
}
