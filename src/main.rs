use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use order_gateway::api;
use order_gateway::config::{self, Config};
use order_gateway::service::{FixtureOrderService, OrderService};
use order_gateway::utils::logging::init_logger;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP gateway
    Serve {
        /// TOML configuration file (falls back to CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON fixture backing the order service
        #[arg(short, long)]
        fixtures: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    ShowConfig {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, fixtures } => {
            let config = config::load_config(config.as_deref())?;
            init_logger(&config.log_level);
            serve(config, fixtures).await?;
        }
        Command::ShowConfig { config } => {
            let config = config::load_config(config.as_deref())?;
            let rendered =
                toml::to_string_pretty(&config).context("Failed to render configuration")?;
            print!("{}", rendered);
        }
    }

    Ok(())
}

async fn serve(config: Config, fixtures: Option<PathBuf>) -> Result<()> {
    let service: Arc<dyn OrderService> = match fixtures {
        Some(path) => {
            info!("Loading order fixtures from {}", path.display());
            Arc::new(FixtureOrderService::from_file(&path)?)
        }
        None => {
            warn!("No fixtures given, serving an empty order store");
            Arc::new(FixtureOrderService::empty())
        }
    };

    api::start_api_server(config, service)
        .await
        .context("API server failed")
}
