//! Webhook commands.
//!
//! Webhooks are configured through the workflows API.

use clap::{Args, Subcommand};

use super::{BodyArgs, create_client, output_result, print_success};
use crate::Cli;

/// Manage webhooks.
#[derive(Args)]
pub struct WebhooksCommand {
    #[command(subcommand)]
    command: WebhooksSubcommand,
}

#[derive(Subcommand)]
enum WebhooksSubcommand {
    /// List all webhooks
    List,
    /// Create a webhook
    Create {
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Get webhook details
    Get {
        /// Webhook (workflow) ID
        id: String,
    },
    /// Update a webhook
    Update {
        /// Webhook (workflow) ID
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Delete a webhook
    Delete {
        /// Webhook (workflow) ID
        id: String,
    },
}

impl WebhooksCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            WebhooksSubcommand::List => {
                let client = create_client(cli)?;
                let result = client.workflows().list().await?;
                print_success("Webhooks retrieved");
                output_result(cli, &result)
            }

            WebhooksSubcommand::Create { body } => {
                let body = body.require()?;
                let client = create_client(cli)?;
                let result = client.workflows().create(body).await?;
                print_success("Webhook created");
                output_result(cli, &result)
            }

            WebhooksSubcommand::Get { id } => {
                let client = create_client(cli)?;
                let result = client.workflows().get(id).await?;
                print_success("Webhook retrieved");
                output_result(cli, &result)
            }

            WebhooksSubcommand::Update { id, body } => {
                let body = body.require()?;
                let client = create_client(cli)?;
                let result = client.workflows().update(id, body).await?;
                print_success("Webhook updated");
                output_result(cli, &result)
            }

            WebhooksSubcommand::Delete { id } => {
                let client = create_client(cli)?;
                client.workflows().delete(id).await?;
                print_success(&format!("Webhook {} deleted", id));
                Ok(())
            }
        }
    }
}
