mod config;
mod logging;
mod signals;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use sea_orm_migration::MigratorTrait as _;

use calculator::domain::Service;
use calculator::infra::storage::migrations::Migrator;
use calculator::infra::storage::OrmCalculationsRepository;
use config::AppConfig;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Calculator microservice - arithmetic over HTTP with an audit trail
#[derive(Parser)]
#[command(name = "calc-server")]
#[command(about = "Calculator microservice - arithmetic over HTTP with an audit trail")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for the HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose);

    let _log_guard = logging::init(&config.logging);
    tracing::info!("calc-server starting");

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_pretty_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    // Loading already validated the shape; the bind address is the only
    // thing left that can be malformed.
    let addr = config.server.socket_addr()?;
    println!("Configuration is valid (listening on {addr})");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let db = sea_orm::Database::connect(config.database.dsn.as_str())
        .await
        .context("database connection failed")?;
    Migrator::up(&db, None)
        .await
        .context("database migration failed")?;
    tracing::info!("Connected to database");

    let repo = Arc::new(OrmCalculationsRepository::new(db));
    let service = Arc::new(Service::new(repo));
    let router = calculator::api::rest::router(service);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Calculator microservice is listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = signals::wait_for_shutdown().await {
                tracing::error!(error = %e, "signal handler failed");
            }
        })
        .await?;

    tracing::info!("calc-server stopped");
    Ok(())
}
