//! Checkout.com API client.

use std::sync::Arc;
use std::time::Duration;

use super::{
    auth::Credentials,
    balances::BalanceService,
    customers::CustomerService,
    disputes::DisputeService,
    environment::{Environment, resolve_base_url},
    error::Result,
    events::EventService,
    http::HttpClient,
    instruments::InstrumentService,
    payments::PaymentService,
    sources::SourceService,
    tokens::TokenService,
    workflows::WorkflowService,
};

/// Fixed per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Checkout.com API client.
///
/// The client provides access to every API resource the CLI exposes.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use cko_checkout::{ApiKeys, Client, Environment};
///
/// # async fn run() -> cko_checkout::Result<()> {
/// let client = Client::builder(Arc::new(ApiKeys::secret("sk_sbox_xxx")))
///     .environment(Environment::Sandbox)
///     .client_id("cli_ab12cd34ef")
///     .build()?;
///
/// let payment = client.payments().get("pay_xxx").await?;
/// # Ok(())
/// # }
/// ```
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder(credentials: Arc<dyn Credentials>) -> ClientBuilder {
        ClientBuilder::new(credentials)
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Returns the payments service.
    pub fn payments(&self) -> PaymentService {
        PaymentService::new(self.http.clone())
    }

    /// Returns the customers service.
    pub fn customers(&self) -> CustomerService {
        CustomerService::new(self.http.clone())
    }

    /// Returns the disputes service.
    pub fn disputes(&self) -> DisputeService {
        DisputeService::new(self.http.clone())
    }

    /// Returns the workflows (webhooks) service.
    pub fn workflows(&self) -> WorkflowService {
        WorkflowService::new(self.http.clone())
    }

    /// Returns the tokens service.
    pub fn tokens(&self) -> TokenService {
        TokenService::new(self.http.clone())
    }

    /// Returns the instruments service.
    pub fn instruments(&self) -> InstrumentService {
        InstrumentService::new(self.http.clone())
    }

    /// Returns the sources service.
    pub fn sources(&self) -> SourceService {
        SourceService::new(self.http.clone())
    }

    /// Returns the events service.
    pub fn events(&self) -> EventService {
        EventService::new(self.http.clone())
    }

    /// Returns the balances service.
    pub fn balances(&self) -> BalanceService {
        BalanceService::new(self.http.clone())
    }

    /// Returns a reference to the internal HTTP client.
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }
}

/// Builder for creating a Checkout.com API client.
pub struct ClientBuilder {
    credentials: Arc<dyn Credentials>,
    environment: Environment,
    client_id: String,
    base_url: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new(credentials: Arc<dyn Credentials>) -> Self {
        Self {
            credentials,
            environment: Environment::default(),
            client_id: String::new(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the API environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets the client ID the tenant prefix is derived from.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Overrides the resolved base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| resolve_base_url(self.environment, &self.client_id));
        let http = HttpClient::new(base_url, self.credentials, self.timeout)?;

        Ok(Client {
            http: Arc::new(http),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ApiKeys;

    #[test]
    fn test_builder_resolves_base_url() {
        let client = Client::builder(Arc::new(ApiKeys::default()))
            .environment(Environment::Production)
            .client_id("cli_ab12cd34ef")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://ab12cd34.api.checkout.com");
    }

    #[test]
    fn test_builder_default_sandbox() {
        let client = Client::builder(Arc::new(ApiKeys::default())).build().unwrap();
        assert_eq!(client.base_url(), "https://api.sandbox.checkout.com");
    }

    #[test]
    fn test_builder_override() {
        let client = Client::builder(Arc::new(ApiKeys::default()))
            .environment(Environment::Production)
            .client_id("cli_ab12cd34ef")
            .base_url("http://127.0.0.1:8080")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }
}
