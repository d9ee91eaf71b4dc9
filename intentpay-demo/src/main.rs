//! Command-line demo for intentpay.
//!
//! # Usage
//!
//! ```bash
//! # List payout chains and tokens
//! cargo run -p intentpay-demo -- chains
//!
//! # Resolve a Polygon USDC -> Base USDC route
//! cargo run -p intentpay-demo -- route \
//!     --to-chain 8453 --to-token 0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913 \
//!     --to-address 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed --to-units 10 \
//!     --preferred-chain 137 --preferred-token 0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359
//!
//! # Configure logging level
//! RUST_LOG=debug cargo run -p intentpay-demo -- status pay_123
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` - Path to TOML configuration file (default: `intentpay.toml`)
//! - `INTENTPAY_API_URL`, `INTENTPAY_API_KEY`, `INTENTPAY_API_VERSION` - API overrides
//! - `RUST_LOG` - Log level filter (default: `info`)

use clap::Parser;
use intentpay_http::ApiClient;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use intentpay_demo::cli::{Cli, Commands};
use intentpay_demo::networks::{full_registry, full_validator};
use intentpay_demo::{DemoConfig, DemoError, commands};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        tracing::error!("intentpay-demo failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), DemoError> {
    let mut config = DemoConfig::load_from(&cli.config)?;
    config.apply_overrides(cli.api_url, cli.api_key, cli.api_version.as_deref())?;

    let registry = full_registry();
    let validator = full_validator(&registry);
    tracing::debug!(chains = registry.len(), "Registry assembled");

    match cli.command {
        Commands::Route(args) => print_json(&commands::route(&registry, &validator, &args)?),
        Commands::Pay(args) => {
            let api = ApiClient::try_new(config.api_config()?)?;
            tracing::info!(
                api_url = %config.api_url,
                version = %config.api_version,
                "Creating payment"
            );
            let order = commands::pay(&registry, &validator, &api, &args, &config).await?;
            print_json(&order)
        }
        Commands::Status { id } => {
            let api = ApiClient::try_new(config.api_config()?)?;
            let order = commands::status(&registry, &api, &id).await?;
            print_json(&order)
        }
        Commands::Chains => print_json(&commands::chains(&registry)),
    }
}

#[allow(clippy::print_stdout)]
fn print_json<T: Serialize>(value: &T) -> Result<(), DemoError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
