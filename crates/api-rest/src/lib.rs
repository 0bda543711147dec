//! # API REST
//!
//! REST API implementation for DRA.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status mapping)
//!
//! Uses `api-shared` for wire types and `dra-core` for report computation.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{HealthRes, HealthService, ReportRes};
use dra_core::{CoreError, PatientId, ReportService};

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub report_service: ReportService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, get_report),
    components(schemas(HealthRes, ReportRes)),
    tags((name = "Reports", description = "Patient diabetes risk assessment reports"))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/report/:patient_id", get(get_report))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/v1/report/{patient_id}",
    tag = "Reports",
    params(("patient_id" = u64, Path, description = "Patient ID", example = 1)),
    responses(
        (status = 200, description = "Report successfully retrieved", body = ReportRes),
        (status = 400, description = "Invalid patient ID"),
        (status = 404, description = "Patient not found"),
        (status = 500, description = "Internal server error")
    )
)]
/// Get a patient's diabetes risk assessment report
///
/// Scans every note written about the patient for trigger terms and classifies the patient
/// from age, gender and the number of distinct terms found.
///
/// # Errors
/// Returns:
/// - `400 Bad Request` if the id is not a positive integer,
/// - `404 Not Found` if the patient does not exist,
/// - `500 Internal Server Error` if a collaborator fails.
#[axum::debug_handler]
async fn get_report(
    State(state): State<AppState>,
    AxumPath(patient_id): AxumPath<String>,
) -> Result<Json<ReportRes>, (StatusCode, &'static str)> {
    let patient_id = match PatientId::parse(&patient_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Invalid patient ID: {:?}", e);
            return Err((StatusCode::BAD_REQUEST, "Invalid patient ID"));
        }
    };

    match state.report_service.compute_report(patient_id).await {
        Ok(report) => Ok(Json(report.into())),
        Err(CoreError::PatientNotFound(_)) => Err((StatusCode::NOT_FOUND, "Patient not found")),
        Err(e) => {
            tracing::error!("Compute report error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}
