//! checkoutapi - A command line interface for the Checkout.com API.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cko_cli::OutputFormat;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{
    BalancesCommand, ConfigCommand, CustomersCommand, DisputesCommand, EventsCommand,
    InstrumentsCommand, PaymentsCommand, SourcesCommand, TokensCommand, WebhooksCommand,
    print_error,
};

const EXAMPLES: &str = "\
Examples:
  $ checkoutapi config set secretKey <your-secret-key>
  $ checkoutapi config set clientId <your-client-id>
  $ checkoutapi payments list --limit 10
  $ checkoutapi payments create -f payment.json
  $ checkoutapi payments get pay_xxx
  $ checkoutapi customers list
  $ checkoutapi disputes list

API Documentation:
  https://api-reference.checkout.com/

Get API Keys:
  https://dashboard.checkout.com/";

/// checkoutapi - A command line interface for the Checkout.com API.
///
/// This tool allows you to work with Checkout.com resources including:
///   - Payments (request, capture, void, refund)
///   - Customers, instruments, sources and tokens
///   - Disputes and evidence
///   - Webhooks (workflows) and events
///   - Balances
///
/// Configuration is stored in ~/.cko/checkoutapi/config.yaml; unset values
/// fall back to the CHECKOUT_* environment variables.
#[derive(Parser)]
#[command(name = "checkoutapi")]
#[command(about = "Checkout.com API CLI - Payment processing and checkout automation")]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Config file (default is ~/.cko/checkoutapi/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output format (json, pretty, yaml)
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// API base URL, overriding the one derived from environment and client ID
    #[arg(long, global = true, hide = true)]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config(ConfigCommand),
    /// Manage payments
    #[command(alias = "payment")]
    Payments(PaymentsCommand),
    /// Manage payment tokens
    #[command(alias = "token")]
    Tokens(TokensCommand),
    /// Manage payment instruments
    #[command(alias = "instrument")]
    Instruments(InstrumentsCommand),
    /// Manage customers
    #[command(alias = "customer")]
    Customers(CustomersCommand),
    /// Manage disputes
    #[command(alias = "dispute")]
    Disputes(DisputesCommand),
    /// Manage webhooks
    #[command(alias = "webhook")]
    Webhooks(WebhooksCommand),
    /// Manage payment sources
    #[command(alias = "source")]
    Sources(SourcesCommand),
    /// View events
    #[command(alias = "event")]
    Events(EventsCommand),
    /// View account balances
    #[command(alias = "balance")]
    Balances(BalancesCommand),
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,cko_checkout=debug,cko_cli=debug,checkout_cli=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Config(cmd) => cmd.run(cli).await,
        Commands::Payments(cmd) => cmd.run(cli).await,
        Commands::Tokens(cmd) => cmd.run(cli).await,
        Commands::Instruments(cmd) => cmd.run(cli).await,
        Commands::Customers(cmd) => cmd.run(cli).await,
        Commands::Disputes(cmd) => cmd.run(cli).await,
        Commands::Webhooks(cmd) => cmd.run(cli).await,
        Commands::Sources(cmd) => cmd.run(cli).await,
        Commands::Events(cmd) => cmd.run(cli).await,
        Commands::Balances(cmd) => cmd.run(cli).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and version go to stdout and are not failures.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);
    if let Ok(path) = dotenv {
        debug!("loaded environment from {}", path.display());
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
