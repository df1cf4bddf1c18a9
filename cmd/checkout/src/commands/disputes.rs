//! Dispute commands.

use clap::{Args, Subcommand};

use super::{BodyArgs, PageArgs, create_client, output_result, print_success};
use crate::Cli;

/// Manage disputes.
///
/// Disputes (chargebacks) can be accepted or challenged with evidence.
#[derive(Args)]
pub struct DisputesCommand {
    #[command(subcommand)]
    command: DisputesSubcommand,
}

#[derive(Subcommand)]
enum DisputesSubcommand {
    /// List all disputes
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Filter by status
        #[arg(long)]
        status: Option<String>,
    },
    /// Get dispute details
    Get {
        /// Dispute ID
        id: String,
    },
    /// Accept a dispute
    Accept {
        /// Dispute ID
        id: String,
    },
    /// Provide evidence for a dispute
    #[command(name = "provide-evidence")]
    ProvideEvidence {
        /// Dispute ID
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },
}

impl DisputesCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            DisputesSubcommand::List { page, status } => {
                let query = page.query().filter("status", status.as_deref());
                let client = create_client(cli)?;
                let result = client.disputes().list(&query).await?;
                print_success("Disputes retrieved");
                output_result(cli, &result)
            }

            DisputesSubcommand::Get { id } => {
                let client = create_client(cli)?;
                let result = client.disputes().get(id).await?;
                print_success("Dispute retrieved");
                output_result(cli, &result)
            }

            DisputesSubcommand::Accept { id } => {
                let client = create_client(cli)?;
                let result = client.disputes().accept(id).await?;
                print_success("Dispute accepted");
                output_result(cli, &result)
            }

            DisputesSubcommand::ProvideEvidence { id, body } => {
                let body = body.require()?;
                let client = create_client(cli)?;
                let result = client.disputes().provide_evidence(id, body).await?;
                print_success("Evidence provided");
                output_result(cli, &result)
            }
        }
    }
}
