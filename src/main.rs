use courses_api::{apply_migrations, build_router, store, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("courses_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = store::connect(&config.database).await?;
    apply_migrations(&pool).await?;

    let app = build_router(AppState { pool }, &config.public_dir);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("server running at {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
