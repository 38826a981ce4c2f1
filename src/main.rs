use dotenvy::dotenv;
use mergington_activities::{create_app, AppConfig, AppState, InMemoryActivityRepository};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mergington_activities=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mergington activities server");

    let config = AppConfig::from_env()?;

    // Roster is seeded once per process and shared by every handler
    let activity_repository = Arc::new(InMemoryActivityRepository::new());
    let app_state = AppState::new(activity_repository);

    let app = create_app(app_state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
