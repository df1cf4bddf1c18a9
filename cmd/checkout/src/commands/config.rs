//! Configuration commands.

use clap::{Args, Subcommand};
use cko_cli::config::{PUBLIC_KEY, SECRET_KEY};
use cko_cli::mask_api_key;
use serde_json::{Map, Value};

use super::{get_config, output_result, print_info, print_success, print_warning};
use crate::Cli;

/// Manage configuration.
///
/// Known keys are secretKey, publicKey, environment (sandbox or production)
/// and clientId.
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to store
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// List all configuration values
    List {
        /// Show API keys unmasked
        #[arg(long)]
        reveal: bool,
    },
    /// Delete a configuration value
    Delete {
        /// Configuration key
        key: String,
    },
    /// Reset the configuration to defaults
    Clear,
    /// Print the configuration file path
    Path,
}

impl ConfigCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let mut store = get_config(cli)?;

        match &self.command {
            ConfigSubcommand::Set { key, value } => {
                store.set(key, value)?;
                print_success(&format!("Set {}", key));
                Ok(())
            }

            ConfigSubcommand::Get { key } => {
                match store.get(key) {
                    Some(value) => println!("{}", value),
                    None => print_warning(&format!("{} is not set", key)),
                }
                Ok(())
            }

            ConfigSubcommand::List { reveal } => {
                let values: Map<String, Value> = store
                    .get_all()
                    .into_iter()
                    .map(|(key, value)| {
                        let shown = if !reveal && (key == SECRET_KEY || key == PUBLIC_KEY) {
                            mask_api_key(&value)
                        } else {
                            value
                        };
                        (key, Value::String(shown))
                    })
                    .collect();

                print_info("Current configuration:");
                output_result(cli, &Value::Object(values))
            }

            ConfigSubcommand::Delete { key } => {
                store.delete(key)?;
                print_success(&format!("Deleted {}", key));
                Ok(())
            }

            ConfigSubcommand::Clear => {
                store.clear()?;
                print_success("Configuration cleared");
                Ok(())
            }

            ConfigSubcommand::Path => {
                println!("{}", store.path().display());
                Ok(())
            }
        }
    }
}
