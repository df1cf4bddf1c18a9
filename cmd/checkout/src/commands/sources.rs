//! Payment source commands.

use clap::{Args, Subcommand};

use super::{BodyArgs, create_client, output_result, print_success};
use crate::Cli;

/// Manage payment sources.
#[derive(Args)]
pub struct SourcesCommand {
    #[command(subcommand)]
    command: SourcesSubcommand,
}

#[derive(Subcommand)]
enum SourcesSubcommand {
    /// Add a payment source
    Create {
        #[command(flatten)]
        body: BodyArgs,
    },
}

impl SourcesCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            SourcesSubcommand::Create { body } => {
                let body = body.require()?;
                let client = create_client(cli)?;
                let result = client.sources().create(body).await?;
                print_success("Source created");
                output_result(cli, &result)
            }
        }
    }
}
