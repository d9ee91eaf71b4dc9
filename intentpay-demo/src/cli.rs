//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use intentpay::chain::ChainId;
use intentpay::proto::FeeType;

use crate::config::DEFAULT_CONFIG_PATH;

/// Route, create and track cross-chain payments.
#[derive(Parser, Debug)]
#[command(name = "intentpay-demo")]
#[command(about = "Route, create and track cross-chain payment intents")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(global = true, long, env = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Payment API root
    #[arg(global = true, long, env = "INTENTPAY_API_URL")]
    pub api_url: Option<String>,

    /// Payment API bearer token
    #[arg(global = true, long, env = "INTENTPAY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Payment API version (v1, v2 or v4)
    #[arg(global = true, long, env = "INTENTPAY_API_VERSION")]
    pub api_version: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a route and print it, without calling the API
    Route(RouteArgs),

    /// Resolve a route, create the payment and print the hydrated order
    Pay(PayArgs),

    /// Fetch a payment and print the hydrated order
    Status {
        /// Payment id
        id: String,
    },

    /// List the chains and tokens payments can settle to
    Chains,
}

/// Destination and funding preference.
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Destination chain id
    #[arg(long)]
    pub to_chain: ChainId,

    /// Destination token (contract, mint or CODE:ISSUER)
    #[arg(long)]
    pub to_token: String,

    /// Payee address
    #[arg(long)]
    pub to_address: String,

    /// Amount to deliver, in human units
    #[arg(long)]
    pub to_units: String,

    /// Chain the payer funds from
    #[arg(long)]
    pub preferred_chain: ChainId,

    /// Token the payer funds with
    #[arg(long)]
    pub preferred_token: String,
}

/// Arguments for `pay`.
#[derive(Args, Debug, Clone)]
pub struct PayArgs {
    /// Route to pay over.
    #[command(flatten)]
    pub route: RouteArgs,

    /// Title shown to the payer (default: "Pay <amount> <symbol> on <chain>")
    #[arg(long)]
    pub title: Option<String>,

    /// Idempotency key passed to the API
    #[arg(long)]
    pub order_id: Option<String>,

    /// Fee handling: exactIn or exactOut
    #[arg(long, default_value = "exactOut")]
    pub fee_type: FeeType,

    /// Memo for the payee (Stellar)
    #[arg(long)]
    pub memo: Option<String>,
}

impl From<&RouteArgs> for intentpay::RoutingRequest {
    fn from(args: &RouteArgs) -> Self {
        Self {
            to_chain: args.to_chain,
            to_token: args.to_token.clone(),
            to_address: args.to_address.clone(),
            to_units: args.to_units.clone(),
            preferred_chain: args.preferred_chain,
            preferred_token: args.preferred_token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pay() {
        let cli = Cli::try_parse_from([
            "intentpay-demo",
            "pay",
            "--to-chain",
            "8453",
            "--to-token",
            "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
            "--to-address",
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "--to-units",
            "5",
            "--preferred-chain",
            "137",
            "--preferred-token",
            "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359",
            "--fee-type",
            "exactIn",
        ])
        .unwrap();
        let Commands::Pay(args) = cli.command else {
            panic!("expected pay");
        };
        assert_eq!(args.route.to_chain, 8453);
        assert_eq!(args.fee_type, FeeType::ExactIn);
        assert!(args.order_id.is_none());
    }
}
