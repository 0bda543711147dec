//! Read-only collaborator interfaces consumed by the report service.
//!
//! Patient and note lookups live outside the engine (remote services, stores, fixtures). The
//! engine only reads through these traits.

use async_trait::async_trait;
use dra_types::PatientId;

use crate::error::ProviderError;
use crate::note::Note;
use crate::patient::Patient;

#[async_trait]
pub trait PatientProvider: Send + Sync {
    /// Look a patient up by id. `Ok(None)` means the patient does not exist.
    async fn get_by_id(&self, id: PatientId) -> Result<Option<Patient>, ProviderError>;
}

#[async_trait]
pub trait NoteProvider: Send + Sync {
    /// Fetch every note written about a patient.
    ///
    /// `Ok(None)` stands for a collaborator that answered with no list at all; callers treat it
    /// the same as an empty list.
    async fn get_by_patient_id(&self, id: PatientId) -> Result<Option<Vec<Note>>, ProviderError>;
}
