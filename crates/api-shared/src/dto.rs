//! JSON request/response bodies exposed over HTTP.

use dra_core::Report;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Diabetes risk report for one patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportRes {
    #[schema(example = "john")]
    pub first_name: String,
    #[schema(example = "doe")]
    pub last_name: String,
    #[schema(example = 45)]
    pub age: u32,
    /// One of `None`, `Borderline`, `In danger`, `Early onset`.
    #[schema(example = "In danger")]
    pub level: String,
}

impl From<Report> for ReportRes {
    fn from(report: Report) -> Self {
        Self {
            first_name: report.first_name,
            last_name: report.last_name,
            age: report.age,
            level: report.level.label().to_owned(),
        }
    }
}
