use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use timesheets::modules::timesheets::core::engine::ReconciliationEngine;
use timesheets::shared::infrastructure::spreadsheet_client::google_sheets::GoogleSheetsClient;
use timesheets::shell::config::AppConfig;
use timesheets::shell::graphql::build_schema;
use timesheets::shell::http::router;
use timesheets::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let client = GoogleSheetsClient::new(&config.sheets_base_url, config.http_timeout)
        .context("failed to build the Sheets client")?;

    let state = AppState::new(
        Arc::new(client),
        ReconciliationEngine::new(config.timezone),
        config.clock_out_policy,
    );
    let app = router(state.clone(), build_schema(state));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(
        addr = %config.bind_addr,
        timezone = %config.timezone,
        clock_out_policy = %config.clock_out_policy,
        "timesheets listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
