//! In-memory record store backed by a YAML records file.
//!
//! The store is loaded once and never written back. It serves both collaborator traits so the
//! server and CLI can run without the patient and note services.
//!
//! Records file layout:
//!
//! ```yaml
//! patients:
//!   - id: 1
//!     firstName: john
//!     lastName: doe
//!     dateOfBirth: 1980-01-25
//!     gender: M
//! notes:
//!   - patientId: 1
//!     practitionerName: Dr Dibon
//!     report: Le patient déclare avoir eu plusieurs épisodes de vertige
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use dra_types::PatientId;
use serde::Deserialize;

use crate::error::ProviderError;
use crate::note::Note;
use crate::patient::Patient;
use crate::providers::{NoteProvider, PatientProvider};
use crate::{CoreError, CoreResult};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RecordsFile {
    #[serde(default)]
    patients: Vec<Patient>,
    #[serde(default)]
    notes: Vec<Note>,
}

/// Patients and their notes, indexed by patient id.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    patients: HashMap<PatientId, Patient>,
    notes: HashMap<PatientId, Vec<Note>>,
}

impl RecordStore {
    /// Build a store from loaded records.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if two patients share an id.
    pub fn new(patients: Vec<Patient>, notes: Vec<Note>) -> CoreResult<Self> {
        let mut by_id = HashMap::with_capacity(patients.len());
        for patient in patients {
            let id = patient.id;
            if by_id.insert(id, patient).is_some() {
                return Err(CoreError::InvalidInput(format!(
                    "duplicate patient id in records: {id}"
                )));
            }
        }

        let mut notes_by_patient: HashMap<PatientId, Vec<Note>> = HashMap::new();
        for note in notes {
            if !by_id.contains_key(&note.patient_id) {
                tracing::warn!("note references unknown patient {}", note.patient_id);
            }
            notes_by_patient.entry(note.patient_id).or_default().push(note);
        }

        Ok(Self {
            patients: by_id,
            notes: notes_by_patient,
        })
    }

    /// Parse a records document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::YamlDeserialization`] if the YAML does not match the records layout,
    /// or any error from [`RecordStore::new`].
    pub fn from_yaml_str(yaml_text: &str) -> CoreResult<Self> {
        let records: RecordsFile =
            serde_yaml::from_str(yaml_text).map_err(CoreError::YamlDeserialization)?;
        Self::new(records.patients, records.notes)
    }

    /// Read and parse a records file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::FileRead`] if the file cannot be read, or any error from
    /// [`RecordStore::from_yaml_str`].
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path).map_err(CoreError::FileRead)?;
        let store = Self::from_yaml_str(&text)?;
        tracing::info!(
            "loaded {} patients from {}",
            store.patients.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }
}

#[async_trait]
impl PatientProvider for RecordStore {
    async fn get_by_id(&self, id: PatientId) -> Result<Option<Patient>, ProviderError> {
        Ok(self.patients.get(&id).cloned())
    }
}

#[async_trait]
impl NoteProvider for RecordStore {
    async fn get_by_patient_id(&self, id: PatientId) -> Result<Option<Vec<Note>>, ProviderError> {
        Ok(Some(self.notes.get(&id).cloned().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::Gender;
    use std::io::Write;

    const RECORDS: &str = r#"
patients:
  - id: 1
    firstName: john
    lastName: doe
    dateOfBirth: 1980-01-25
    gender: M
  - id: 2
    firstName: jane
    lastName: doe
    dateOfBirth: 2000-01-25
    gender: FEMALE
    address: new york
notes:
  - patientId: 1
    practitionerName: Dr Dibon
    report: Tests de laboratoire indiquant une microalbumine élevée
  - patientId: 1
    created: 2024-03-01T10:15:00
  - patientId: 2
    report: Fumeur
"#;

    fn id(raw: u64) -> PatientId {
        PatientId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn loads_patients_and_groups_notes() {
        let store = RecordStore::from_yaml_str(RECORDS).expect("valid records");
        assert_eq!(store.patient_count(), 2);

        let jane = store.get_by_id(id(2)).await.unwrap().expect("jane exists");
        assert_eq!(jane.gender, Gender::Female);
        assert_eq!(jane.address.as_deref(), Some("new york"));

        let notes = store.get_by_patient_id(id(1)).await.unwrap().unwrap();
        assert_eq!(notes.len(), 2);
        assert!(notes[1].report.is_none());
    }

    #[tokio::test]
    async fn unknown_patient_is_absent_with_empty_notes() {
        let store = RecordStore::from_yaml_str(RECORDS).unwrap();
        assert!(store.get_by_id(id(99)).await.unwrap().is_none());
        assert_eq!(store.get_by_patient_id(id(99)).await.unwrap(), Some(vec![]));
    }

    #[test]
    fn duplicate_patient_ids_are_rejected() {
        let yaml = r#"
patients:
  - { id: 1, firstName: a, lastName: b, dateOfBirth: 1990-01-01, gender: M }
  - { id: 1, firstName: c, lastName: d, dateOfBirth: 1991-01-01, gender: F }
"#;
        let err = RecordStore::from_yaml_str(yaml).expect_err("expected duplicate failure");
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = RecordStore::from_yaml_str("visits: []\n").expect_err("expected schema failure");
        assert!(matches!(err, CoreError::YamlDeserialization(_)));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RECORDS.as_bytes()).unwrap();

        let store = RecordStore::load(file.path()).expect("records load");
        assert_eq!(store.patient_count(), 2);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RecordStore::load(&dir.path().join("missing.yaml")).expect_err("missing file");
        assert!(matches!(err, CoreError::FileRead(_)));
    }
}
