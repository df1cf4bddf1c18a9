//! Payment commands.

use clap::{Args, Subcommand};

use super::{BodyArgs, PageArgs, create_client, output_result, print_success};
use crate::Cli;

/// Manage payments.
///
/// Request payments and capture, void or refund them afterwards.
#[derive(Args)]
pub struct PaymentsCommand {
    #[command(subcommand)]
    command: PaymentsSubcommand,
}

#[derive(Subcommand)]
enum PaymentsSubcommand {
    /// Request a payment
    Create {
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Get payment details
    Get {
        /// Payment ID
        id: String,
    },
    /// List payments
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Filter by reference
        #[arg(long)]
        reference: Option<String>,
    },
    /// Capture a payment
    Capture {
        /// Payment ID
        id: String,
        #[command(flatten)]
        body: BodyArgs,
        /// Amount to capture, in minor units
        #[arg(long)]
        amount: Option<i64>,
    },
    /// Void a payment
    Void {
        /// Payment ID
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Refund a payment
    Refund {
        /// Payment ID
        id: String,
        #[command(flatten)]
        body: BodyArgs,
        /// Amount to refund, in minor units
        #[arg(long)]
        amount: Option<i64>,
    },
    /// Get payment actions
    Actions {
        /// Payment ID
        id: String,
    },
}

impl PaymentsCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            PaymentsSubcommand::Create { body } => {
                let body = body.require()?;
                let client = create_client(cli)?;
                let result = client.payments().create(body).await?;
                print_success("Payment created");
                output_result(cli, &result)
            }

            PaymentsSubcommand::Get { id } => {
                let client = create_client(cli)?;
                let result = client.payments().get(id).await?;
                print_success("Payment retrieved");
                output_result(cli, &result)
            }

            PaymentsSubcommand::List { page, reference } => {
                let query = page.query().filter("reference", reference.as_deref());
                let client = create_client(cli)?;
                let result = client.payments().list(&query).await?;
                print_success("Payments retrieved");
                output_result(cli, &result)
            }

            PaymentsSubcommand::Capture { id, body, amount } => {
                let body = body.load_or_amount(*amount)?;
                let client = create_client(cli)?;
                let result = client.payments().capture(id, body).await?;
                print_success("Payment captured");
                output_result(cli, &result)
            }

            PaymentsSubcommand::Void { id, body } => {
                let body = body.load()?;
                let client = create_client(cli)?;
                let result = client.payments().void(id, body).await?;
                print_success("Payment voided");
                output_result(cli, &result)
            }

            PaymentsSubcommand::Refund { id, body, amount } => {
                let body = body.load_or_amount(*amount)?;
                let client = create_client(cli)?;
                let result = client.payments().refund(id, body).await?;
                print_success("Payment refunded");
                output_result(cli, &result)
            }

            PaymentsSubcommand::Actions { id } => {
                let client = create_client(cli)?;
                let result = client.payments().actions(id).await?;
                print_success("Payment actions retrieved");
                output_result(cli, &result)
            }
        }
    }
}
