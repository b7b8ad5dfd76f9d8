use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{config::ServerConfig, Db};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = ServerConfig::parse();

    let db = Db::open(&config.database)
        .with_context(|| format!("open database {}", config.database.display()))?;
    let seeded = db.migrate().await.context("migrate database")?;
    tracing::info!(database = %config.database.display(), seeded, "database ready");

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("bind {}", config.listen))?;
    tracing::info!(addr = %config.listen, "listening");
    todo_server::run(listener, db)
        .await
        .context("server terminated with error")
}
