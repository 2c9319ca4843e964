use activity_tracker::{load_seed, router, ActivityLog, AppState, Config};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;

    let records = match &config.seed_path {
        Some(path) => load_seed(path).await?,
        None => Vec::new(),
    };
    let log = ActivityLog::from_records(&records, config.duplicate_policy)?;
    info!(
        days = log.len(),
        policy = ?config.duplicate_policy,
        "activity log ready"
    );

    let app = router(AppState::new(log));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            error!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    }
}
