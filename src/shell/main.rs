use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use service_desk::modules::service_desk::adapters::outbound::entity_store_in_memory::InMemoryEntityStore;
use service_desk::modules::service_desk::core::seed::seed_data;
use service_desk::shell::config::AppConfig;
use service_desk::shell::http::router;
use service_desk::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // In-memory store, reseeded on every start
    let store = Arc::new(InMemoryEntityStore::seeded(seed_data()));
    let app = router(AppState::new(store));

    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Service desk API: http://{}", address);
    tracing::info!("GraphQL endpoint: http://{}/gql", address);
    axum::serve(listener, app).await?;
    Ok(())
}
