//! Point d'entrée principal du backend.
//! Charge la base des comptes et démarre le serveur web avec Axum.

use std::net::SocketAddr;
use anyhow::{Context, Result};
use bbbank::{backend, config::ServerConfig, database};
use dotenv::dotenv;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Charger les variables d'environnement
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = ServerConfig::from_env()?;

    // Charger la base des comptes
    let count = database::account::load(&config.accounts_db_path)
        .with_context(|| format!("Failed to load {}", config.accounts_db_path.display()))?;
    info!("{} comptes chargés depuis {}", count, config.accounts_db_path.display());

    let app = backend::router::get_router();

    // Démarrer le serveur web
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to open web server listener")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await
        .context("Failed to bind Axum to listener")?;

    Ok(())
}
