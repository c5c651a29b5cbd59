//! Deskboard - Terminal kanban board for helpdesk conversations
//!
//! Main entry point for the Deskboard CLI.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use deskboard::cli::{Cli, Commands};
use deskboard::commands;
use deskboard::config::{self, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load and validate configuration
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);
    let config = Config::load(&config_path)?;
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Login { account_id, token } => {
            tracing::info!("Storing gateway credentials");
            commands::login::run_login(account_id, token)
        }
        Commands::Board => {
            tracing::info!("Loading board");
            commands::board::run_board(&config).await
        }
        Commands::Move { id, status } => {
            tracing::info!("Moving conversation {} to '{}'", id, status);
            commands::move_status::run_move(&config, id, &status).await
        }
        Commands::Show { id } => {
            tracing::info!("Showing conversation {}", id);
            commands::show::run_show(&config, id).await
        }
        Commands::Serve { port, upstream } => {
            tracing::info!("Starting proxy server");
            commands::serve::run_serve(config, port, upstream).await
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "deskboard=debug"
    } else {
        "deskboard=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
