use mcq_generator::{
    app,
    config::{get_config, init_config},
    database::{
        pool::{create_pool, run_migrations},
        quiz_repository::QuizRepository,
    },
    AppState,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    init_config()?;
    let config = get_config();

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;

    let app_state = AppState::new(config.clone(), QuizRepository::postgres(pool));

    if let Some(ttl) = app_state.quiz_service.ttl() {
        info!(ttl_hours = ttl.num_hours(), "quiz expiry sweeper enabled");
        let quiz_service = app_state.quiz_service.clone();
        tokio::spawn(async move {
            loop {
                if let Err(e) = quiz_service.purge_expired().await {
                    tracing::error!(error = ?e, "quiz expiry sweep failed");
                }
                tokio::time::sleep(SWEEP_INTERVAL).await;
            }
        });
    }

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
