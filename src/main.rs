mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env is normal outside local development.
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "quizarena admin host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env()?;
    if !config.dist_dir.join("index.html").is_file() {
        tracing::warn!(dist_dir = %config.dist_dir.display(), "index.html not found; run `trunk build` in client/");
    }

    let app = routes::app(&config.dist_dir);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, dist_dir = %config.dist_dir.display(), "quizarena admin listening");
    axum::serve(listener, app).await?;
    Ok(())
}
