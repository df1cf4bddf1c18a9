//! Customer commands.

use clap::{Args, Subcommand};

use super::{BodyArgs, create_client, output_result, print_success};
use crate::Cli;

/// Manage customers.
#[derive(Args)]
pub struct CustomersCommand {
    #[command(subcommand)]
    command: CustomersSubcommand,
}

#[derive(Subcommand)]
enum CustomersSubcommand {
    /// Create a customer
    Create {
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Get customer details
    Get {
        /// Customer ID
        id: String,
    },
    /// Update customer details
    Update {
        /// Customer ID
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Delete a customer
    Delete {
        /// Customer ID
        id: String,
    },
}

impl CustomersCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            CustomersSubcommand::Create { body } => {
                let body = body.require()?;
                let client = create_client(cli)?;
                let result = client.customers().create(body).await?;
                print_success("Customer created");
                output_result(cli, &result)
            }

            CustomersSubcommand::Get { id } => {
                let client = create_client(cli)?;
                let result = client.customers().get(id).await?;
                print_success("Customer retrieved");
                output_result(cli, &result)
            }

            CustomersSubcommand::Update { id, body } => {
                let body = body.require()?;
                let client = create_client(cli)?;
                let result = client.customers().update(id, body).await?;
                print_success("Customer updated");
                output_result(cli, &result)
            }

            CustomersSubcommand::Delete { id } => {
                let client = create_client(cli)?;
                client.customers().delete(id).await?;
                print_success(&format!("Customer {} deleted", id));
                Ok(())
            }
        }
    }
}
