//! Checkout.com API SDK for Rust.
//!
//! This crate provides a schema-agnostic client for the Checkout.com REST API.
//! Request and response bodies are plain [`serde_json::Value`]s.

mod auth;
mod balances;
mod client;
mod customers;
mod disputes;
mod environment;
mod error;
mod events;
pub mod http;
mod instruments;
mod payments;
mod sources;
mod tokens;
mod types;
mod workflows;

pub use auth::{ApiKeys, Credentials, KeyKind, auth_headers, validate_api_key_format};
pub use balances::BalanceService;
pub use client::{Client, ClientBuilder, DEFAULT_TIMEOUT};
pub use customers::CustomerService;
pub use disputes::DisputeService;
pub use environment::{
    Environment, PRODUCTION_HOST, SANDBOX_HOST, resolve_base_url, tenant_prefix,
};
pub use error::{Error, ErrorKind, Result};
pub use events::EventService;
pub use http::{HttpClient, Request};
pub use instruments::InstrumentService;
pub use payments::PaymentService;
pub use sources::SourceService;
pub use tokens::TokenService;
pub use types::{DEFAULT_LIMIT, DEFAULT_SKIP, ListQuery};
pub use workflows::WorkflowService;
