//! CLI utilities for checkoutapi.
//!
//! This crate provides the configuration store, output formatting and
//! request-body loading shared by the command handlers.

pub mod config;
pub mod output;
pub mod request;

pub use config::{ConfigError, ConfigStore, default_config_path, mask_api_key};
pub use output::{Output, OutputFormat, format_value};
pub use request::{RequestError, load_body, require_body};
