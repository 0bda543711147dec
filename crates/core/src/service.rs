//! Report service: the engine's single exposed capability.

use std::sync::Arc;

use dra_types::PatientId;

use crate::clock::Clock;
use crate::providers::{NoteProvider, PatientProvider};
use crate::report::{assemble, Report};
use crate::risk::classify;
use crate::{CoreConfig, CoreError, CoreResult};

/// Computes diabetes risk reports from collaborator data.
///
/// Holds no mutable state; clones share the same configuration and collaborators.
#[derive(Clone)]
pub struct ReportService {
    cfg: Arc<CoreConfig>,
    patients: Arc<dyn PatientProvider>,
    notes: Arc<dyn NoteProvider>,
    clock: Arc<dyn Clock>,
}

impl ReportService {
    pub fn new(
        cfg: Arc<CoreConfig>,
        patients: Arc<dyn PatientProvider>,
        notes: Arc<dyn NoteProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cfg,
            patients,
            notes,
            clock,
        }
    }

    /// Compute the risk report for one patient.
    ///
    /// Patient and note lookups run concurrently. A missing note list counts as no notes.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`CoreError::PatientNotFound`] if the patient collaborator has no such patient,
    /// - [`CoreError::Provider`] if either collaborator fails.
    pub async fn compute_report(&self, patient_id: PatientId) -> CoreResult<Report> {
        let (patient, notes) = tokio::join!(
            self.patients.get_by_id(patient_id),
            self.notes.get_by_patient_id(patient_id),
        );

        let Some(patient) = patient? else {
            tracing::warn!("patient {} not found", patient_id);
            return Err(CoreError::PatientNotFound(patient_id));
        };
        let notes = notes?.unwrap_or_default();

        let trigger_count = self.cfg.vocabulary().count_triggers(&notes);
        let today = self.clock.today();
        let level = classify(patient.age_at(today), patient.gender, trigger_count);

        tracing::debug!(
            "patient {}: {} notes, {} triggers, level {}",
            patient_id,
            notes.len(),
            trigger_count,
            level
        );

        Ok(assemble(&patient, level, today))
    }
}
