//! Deskbot CLI and REST API entry point.
//!
//! Binary name: `deskbot`
//!
//! Parses CLI arguments, initializes the database and services, then starts
//! the REST API server or reports status.

mod http;
mod state;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use deskbot_core::chat::repository::MessageRepository;
use deskbot_infra::sqlite::message::SqliteMessageRepository;
use deskbot_types::prompt::PromptVariant;

use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "deskbot", version, about = "Customer-support chatbot backend")]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the REST API server
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// System-prompt variant: support, api_documentation, error_handling
        #[arg(long, default_value = "support")]
        prompt: String,
    },

    /// Show database location and message counts
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,deskbot=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { host, port, prompt } => {
            // Unknown variant names are a configuration error: fail here,
            // before the server ever accepts a request.
            let variant: PromptVariant = prompt
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;

            let state = AppState::init(variant).await?;

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(addr = %addr, variant = %variant, "Deskbot API listening");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("Server stopped");
        }

        Commands::Status => {
            let data_dir = state::resolve_data_dir();
            let db_path = data_dir.join("deskbot.db");
            let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

            let pool = deskbot_infra::sqlite::pool::DatabasePool::new(&db_url).await?;
            let repo = SqliteMessageRepository::new(pool);
            let total = repo.count_all().await?;

            println!("database: {}", db_path.display());
            println!("messages: {total}");
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
