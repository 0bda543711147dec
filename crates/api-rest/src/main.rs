//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, without `.env` loading.
//!
//! ## Intended use
//! Useful for development and debugging. The workspace's main `dra-run` binary is the
//! deployment entry point.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use dra_core::{resolve_vocabulary, CoreConfig, RecordStore, ReportService, SystemClock};

/// Main entry point for the DRA REST API server
///
/// # Environment Variables
/// - `DRA_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `DRA_RECORDS_FILE`: YAML records file serving patients and notes (required)
/// - `DRA_TRIGGER_TERMS_FILE`: YAML list overriding the trigger vocabulary (optional)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the records file or vocabulary override cannot be loaded,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("dra_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("DRA_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let Ok(records_file) = std::env::var("DRA_RECORDS_FILE") else {
        anyhow::bail!("DRA_RECORDS_FILE must point to a YAML records file");
    };
    let store = Arc::new(RecordStore::load(&PathBuf::from(records_file))?);

    let terms_override = std::env::var("DRA_TRIGGER_TERMS_FILE")
        .ok()
        .map(PathBuf::from);
    let cfg = Arc::new(CoreConfig::new(resolve_vocabulary(terms_override)?));

    tracing::info!("-- Starting DRA REST API on {}", addr);
    tracing::info!("-- {} trigger terms active", cfg.vocabulary().len());

    let report_service = ReportService::new(cfg, store.clone(), store, Arc::new(SystemClock));
    let app = router(AppState { report_service });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
