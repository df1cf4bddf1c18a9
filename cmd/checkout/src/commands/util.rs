//! Utility functions for CLI commands.

use std::io::IsTerminal;
use std::sync::Arc;

use clap::Args;
use cko_checkout::{Client, DEFAULT_LIMIT, DEFAULT_SKIP, ListQuery};
use cko_cli::{ConfigStore, Output, RequestError, load_body, require_body};
use serde_json::{Value, json};
use tracing::debug;

use crate::Cli;

const APP_NAME: &str = "checkoutapi";

/// Request body sources shared by commands that send data.
#[derive(Args, Debug)]
pub struct BodyArgs {
    /// JSON file with request data (YAML for .yaml/.yml, `-` for stdin)
    #[arg(short = 'f', long = "file")]
    pub file: Option<String>,

    /// JSON string with request data
    #[arg(short = 'd', long = "data")]
    pub data: Option<String>,
}

impl BodyArgs {
    /// Loads the body if a source was given.
    pub fn load(&self) -> Result<Option<Value>, RequestError> {
        load_body(self.file.as_deref(), self.data.as_deref())
    }

    /// Loads the body, failing when no source was given.
    pub fn require(&self) -> Result<Value, RequestError> {
        require_body(self.file.as_deref(), self.data.as_deref())
    }

    /// Loads the body, falling back to `{"amount": n}` when only an amount
    /// was given.
    pub fn load_or_amount(&self, amount: Option<i64>) -> Result<Option<Value>, RequestError> {
        Ok(self
            .load()?
            .or_else(|| amount.map(|a| json!({ "amount": a }))))
    }
}

/// Page selection for list commands.
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Number of results
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Number to skip
    #[arg(long, default_value_t = DEFAULT_SKIP)]
    pub skip: u32,
}

impl PageArgs {
    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.limit, self.skip)
    }
}

/// Opens the configuration store.
pub fn get_config(cli: &Cli) -> anyhow::Result<ConfigStore> {
    let store = match cli.config.as_deref() {
        Some(path) => ConfigStore::open(path)?,
        None => ConfigStore::open_default(APP_NAME)?,
    };
    Ok(store)
}

/// Creates a Checkout.com API client from the configuration.
pub fn create_client(cli: &Cli) -> anyhow::Result<Client> {
    let store = get_config(cli)?;
    let environment = store.api_environment();
    let client_id = store.client_id();

    let mut builder = Client::builder(Arc::new(store))
        .environment(environment)
        .client_id(client_id);

    if let Some(url) = cli.base_url.as_deref() {
        builder = builder.base_url(url);
    }

    let client = builder.build()?;
    debug!("using {} ({})", client.base_url(), environment);
    Ok(client)
}

/// Outputs the result in the selected format.
pub fn output_result(cli: &Cli, result: &Value) -> anyhow::Result<()> {
    Output::new(cli.format, cli.output.clone()).write(result)?;
    Ok(())
}

fn paint(code: &str, symbol: &str) -> String {
    if std::io::stderr().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, symbol)
    } else {
        symbol.to_string()
    }
}

/// Prints success message.
pub fn print_success(msg: &str) {
    eprintln!("{} {}", paint("32", "✓"), msg);
}

/// Prints error message.
pub fn print_error(msg: &str) {
    eprintln!("{} Error: {}", paint("31", "✗"), msg);
}

/// Prints info message.
pub fn print_info(msg: &str) {
    eprintln!("{} {}", paint("34", "ℹ"), msg);
}

/// Prints warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", paint("33", "⚠"), msg);
}
