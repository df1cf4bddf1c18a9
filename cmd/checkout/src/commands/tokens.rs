//! Token commands.

use clap::{Args, Subcommand};

use super::{BodyArgs, create_client, output_result, print_success};
use crate::Cli;

/// Manage payment tokens.
///
/// Tokens are created with the public key.
#[derive(Args)]
pub struct TokensCommand {
    #[command(subcommand)]
    command: TokensSubcommand,
}

#[derive(Subcommand)]
enum TokensSubcommand {
    /// Create a payment token
    Create {
        #[command(flatten)]
        body: BodyArgs,
    },
}

impl TokensCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            TokensSubcommand::Create { body } => {
                let body = body.require()?;
                let client = create_client(cli)?;
                let result = client.tokens().create(body).await?;
                print_success("Token created");
                output_result(cli, &result)
            }
        }
    }
}
