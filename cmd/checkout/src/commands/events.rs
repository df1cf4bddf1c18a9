//! Event commands.

use clap::{Args, Subcommand};

use super::{PageArgs, create_client, output_result, print_success};
use crate::Cli;

/// View events.
#[derive(Args)]
pub struct EventsCommand {
    #[command(subcommand)]
    command: EventsSubcommand,
}

#[derive(Subcommand)]
enum EventsSubcommand {
    /// List events
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Filter by payment ID
        #[arg(long)]
        payment_id: Option<String>,
    },
    /// Get event details
    Get {
        /// Event ID
        id: String,
    },
    /// List available event types
    Types,
}

impl EventsCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            EventsSubcommand::List { page, payment_id } => {
                let query = page.query().filter("payment_id", payment_id.as_deref());
                let client = create_client(cli)?;
                let result = client.events().list(&query).await?;
                print_success("Events retrieved");
                output_result(cli, &result)
            }

            EventsSubcommand::Get { id } => {
                let client = create_client(cli)?;
                let result = client.events().get(id).await?;
                print_success("Event retrieved");
                output_result(cli, &result)
            }

            EventsSubcommand::Types => {
                let client = create_client(cli)?;
                let result = client.events().types().await?;
                print_success("Event types retrieved");
                output_result(cli, &result)
            }
        }
    }
}
