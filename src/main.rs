use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use dra_core::{resolve_vocabulary, CoreConfig, RecordStore, ReportService, SystemClock};

/// Main entry point for the DRA application
///
/// Loads `.env`, resolves configuration once, then serves the REST API until Ctrl-C.
///
/// # Environment Variables
/// - `DRA_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `DRA_RECORDS_FILE`: YAML records file serving patients and notes (required)
/// - `DRA_TRIGGER_TERMS_FILE`: YAML list overriding the trigger vocabulary (optional)
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dra_run=info".parse()?)
                .add_directive("dra_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("DRA_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let records_file = match std::env::var("DRA_RECORDS_FILE") {
        Ok(path) => PathBuf::from(path),
        Err(_) => anyhow::bail!("DRA_RECORDS_FILE must point to a YAML records file"),
    };
    let store = Arc::new(RecordStore::load(&records_file)?);

    let terms_override = std::env::var("DRA_TRIGGER_TERMS_FILE")
        .ok()
        .map(PathBuf::from);
    let cfg = Arc::new(CoreConfig::new(resolve_vocabulary(terms_override)?));

    tracing::info!("++ Starting DRA REST on {}", rest_addr);
    tracing::info!(
        "++ {} patients loaded, {} trigger terms active",
        store.patient_count(),
        cfg.vocabulary().len()
    );

    let report_service = ReportService::new(cfg, store.clone(), store, Arc::new(SystemClock));
    let app = router(AppState { report_service });

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("++ Shutting down DRA REST");
        })
        .await?;

    Ok(())
}
