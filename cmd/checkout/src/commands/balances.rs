//! Balance commands.

use clap::{Args, Subcommand};

use super::{create_client, output_result, print_success};
use crate::Cli;

/// View account balances.
#[derive(Args)]
pub struct BalancesCommand {
    #[command(subcommand)]
    command: BalancesSubcommand,
}

#[derive(Subcommand)]
enum BalancesSubcommand {
    /// Get account balances
    Get,
}

impl BalancesCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            BalancesSubcommand::Get => {
                let client = create_client(cli)?;
                let result = client.balances().get().await?;
                print_success("Balances retrieved");
                output_result(cli, &result)
            }
        }
    }
}
