use anyhow::Context;
use tracing_subscriber::EnvFilter;

use granhotel_billing::backend::BackendClient;
use granhotel_billing::config::AppConfig;
use granhotel_billing::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("granhotel_billing=info,tower_http=info")
        }))
        .init();

    let config = AppConfig::from_env()?;
    let backend = BackendClient::new(&config.backend_base_url, config.backend_timeout)
        .context("building backend client")?;

    let app = router(AppState { backend });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!("granhotel-billing listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
