use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::{Config, LoggingSettings};
use database::{DbRepository, connect, run_migrations, seed_demo_data};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// The main entry point for the Fyyur booking site.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; every setting has a default.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = configuration::load_config_from(&cli.config)?;
    let _log_guard = init_tracing(&config.logging);

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            web_server::run_server(&config).await?;
        }
        Commands::Migrate => {
            let pool = connect(&config.database).await?;
            run_migrations(&pool).await?;
            tracing::info!("Migrations applied.");
        }
        Commands::Seed => handle_seed(&config).await?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Fyyur: a booking site for local venues and musical artists.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the configuration file. It may be absent.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server.
    Serve {
        /// Overrides `server.host`.
        #[arg(long)]
        host: Option<String>,
        /// Overrides `server.port`.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Apply the database migrations and exit.
    Migrate,
    /// Load the demo venues, artists and shows.
    Seed,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_seed(config: &Config) -> anyhow::Result<()> {
    let pool = connect(&config.database).await?;
    run_migrations(&pool).await?;
    let repo = DbRepository::new(pool);

    let summary = seed_demo_data(&repo).await?;
    tracing::info!(?summary, "Demo data loaded.");

    let mut table = Table::new();
    table.set_header(vec!["Venues", "Artists", "Shows"]);
    table.add_row(vec![
        summary.venues.to_string(),
        summary.artists.to_string(),
        summary.shows.to_string(),
    ]);
    println!("{table}");

    Ok(())
}

/// Logs to stdout, and also to a daily rolling file when `log_dir` is set.
///
/// `RUST_LOG` overrides the configured filter. The returned guard must be held
/// until exit so buffered file output is flushed.
fn init_tracing(settings: &LoggingSettings) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter));

    let (file_layer, guard) = match &settings.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, &settings.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}
