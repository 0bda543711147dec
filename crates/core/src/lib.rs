//! # DRA Core
//!
//! Diabetes risk assessment engine.
//!
//! Given a patient snapshot and the free-text notes written about them, this crate produces a
//! risk [`Report`]:
//! - [`TriggerVocabulary`] scans note text for clinical trigger terms,
//! - [`classify`] maps age, gender and distinct trigger count to a [`RiskLevel`],
//! - [`assemble`] builds the final report,
//! - [`ReportService`] orchestrates the above over the [`PatientProvider`] and
//!   [`NoteProvider`] collaborators.
//!
//! **No API concerns**: HTTP servers, CLI parsing and wire DTOs belong in `api-rest`,
//! `api-shared` and `dra-cli`.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod note;
pub mod patient;
pub mod providers;
pub mod report;
pub mod risk;
pub mod service;
pub mod store;
pub mod triggers;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{resolve_vocabulary, CoreConfig};
pub use error::{CoreError, CoreResult, ProviderError};
pub use note::Note;
pub use patient::{Gender, Patient};
pub use providers::{NoteProvider, PatientProvider};
pub use report::{assemble, Report};
pub use risk::{classify, RiskLevel};
pub use service::ReportService;
pub use store::RecordStore;
pub use triggers::TriggerVocabulary;

pub use dra_types::{NonEmptyText, PatientId};
