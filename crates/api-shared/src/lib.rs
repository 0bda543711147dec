//! # API Shared
//!
//! Shared definitions for DRA APIs.
//!
//! Contains:
//! - Wire DTOs with OpenAPI schemas (`dto` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `dra-run` server binary.

pub mod dto;
pub mod health;

pub use dto::{HealthRes, ReportRes};
pub use health::HealthService;
