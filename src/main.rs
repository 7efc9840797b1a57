mod cli;
mod config;
mod db;
mod error;

use crate::cli::Cli;
use crate::config::Config;
use anyhow::Result;
use clap::Parser;
use sea_orm_migration::MigratorTrait;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    let log_level = config.log_level();
    let log_dir = &config.logging.dir;

    // Create log directory if it doesn't exist
    std::fs::create_dir_all(log_dir)?;

    // Setup file appender (daily rotation)
    let file_appender = tracing_appender::rolling::daily(log_dir, "chat_registry.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let local_timer = ChronoLocal::rfc_3339();

    // Logs go to stderr so command output on stdout stays clean
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(local_timer.clone());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(local_timer)
        .with_writer(non_blocking);

    let filter_layer = EnvFilter::from_default_env()
        .add_directive(log_level.into())
        .add_directive("sqlx=warn".parse()?)
        .add_directive("sea_orm=warn".parse()?);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    info!("Logs are written to: {}", log_dir);

    // Connect to database
    let db = db::establish_connection(&config.database.url).await?;

    // Run migrations
    migration::Migrator::up(&db, None).await?;
    info!("Database migrations completed");

    let repo = db::repo::Repo::new(db);
    repo.ping().await?;

    cli::run(cli.command, &repo).await
}
