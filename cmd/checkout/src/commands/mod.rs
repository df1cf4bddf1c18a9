//! CLI commands module.

mod balances;
mod config;
mod customers;
mod disputes;
mod events;
mod instruments;
mod payments;
mod sources;
mod tokens;
mod util;
mod webhooks;

pub use balances::BalancesCommand;
pub use config::ConfigCommand;
pub use customers::CustomersCommand;
pub use disputes::DisputesCommand;
pub use events::EventsCommand;
pub use instruments::InstrumentsCommand;
pub use payments::PaymentsCommand;
pub use sources::SourcesCommand;
pub use tokens::TokensCommand;
pub use webhooks::WebhooksCommand;

// Re-export utils for use in commands
pub(crate) use util::*;
