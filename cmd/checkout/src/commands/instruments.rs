//! Payment instrument commands.

use clap::{Args, Subcommand};

use super::{BodyArgs, create_client, output_result, print_success};
use crate::Cli;

/// Manage stored payment instruments.
#[derive(Args)]
pub struct InstrumentsCommand {
    #[command(subcommand)]
    command: InstrumentsSubcommand,
}

#[derive(Subcommand)]
enum InstrumentsSubcommand {
    /// Create a payment instrument
    Create {
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Get instrument details
    Get {
        /// Instrument ID
        id: String,
    },
    /// Update an instrument
    Update {
        /// Instrument ID
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Delete an instrument
    Delete {
        /// Instrument ID
        id: String,
    },
}

impl InstrumentsCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            InstrumentsSubcommand::Create { body } => {
                let body = body.require()?;
                let client = create_client(cli)?;
                let result = client.instruments().create(body).await?;
                print_success("Instrument created");
                output_result(cli, &result)
            }

            InstrumentsSubcommand::Get { id } => {
                let client = create_client(cli)?;
                let result = client.instruments().get(id).await?;
                print_success("Instrument retrieved");
                output_result(cli, &result)
            }

            InstrumentsSubcommand::Update { id, body } => {
                let body = body.require()?;
                let client = create_client(cli)?;
                let result = client.instruments().update(id, body).await?;
                print_success("Instrument updated");
                output_result(cli, &result)
            }

            InstrumentsSubcommand::Delete { id } => {
                let client = create_client(cli)?;
                client.instruments().delete(id).await?;
                print_success(&format!("Instrument {} deleted", id));
                Ok(())
            }
        }
    }
}
