//! HTTP request executor for the Checkout.com API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    Client as ReqwestClient, Method, Response, Url,
    header::{HeaderValue, RETRY_AFTER, USER_AGENT},
};
use serde_json::{Value, json};
use tracing::debug;

use super::{
    auth::{Credentials, KeyKind, auth_headers},
    error::{Error, Result, body_value},
};

const USER_AGENT_VALUE: &str = concat!("cko-checkout-rust/", env!("CARGO_PKG_VERSION"));

/// A single API call: verb, endpoint, query, body and key selector.
///
/// Built once per invocation and consumed by [`HttpClient::execute`].
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    endpoint: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    key: KeyKind,
}

impl Request {
    fn new(method: Method, endpoint: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Vec::new(),
            body,
            key: KeyKind::Secret,
        }
    }

    /// A GET request.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint, None)
    }

    /// A POST request. A missing body is sent as `{}`.
    pub fn post(endpoint: impl Into<String>, body: Option<Value>) -> Self {
        Self::new(Method::POST, endpoint, Some(body.unwrap_or_else(|| json!({}))))
    }

    /// A PUT request. A missing body is sent as `{}`.
    pub fn put(endpoint: impl Into<String>, body: Option<Value>) -> Self {
        Self::new(Method::PUT, endpoint, Some(body.unwrap_or_else(|| json!({}))))
    }

    /// A PATCH request. A missing body is sent as `{}`.
    pub fn patch(endpoint: impl Into<String>, body: Option<Value>) -> Self {
        Self::new(Method::PATCH, endpoint, Some(body.unwrap_or_else(|| json!({}))))
    }

    /// A DELETE request.
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint, None)
    }

    /// Sets the query parameters.
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Selects the API key used for authentication.
    pub fn with_key(mut self, key: KeyKind) -> Self {
        self.key = key;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn key(&self) -> KeyKind {
        self.key
    }
}

/// HTTP client bound to one base URL and one credential source.
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    credentials: Arc<dyn Credentials>,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(
        base_url: impl Into<String>,
        credentials: Arc<dyn Credentials>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| Error::Request(format!("invalid base URL '{}': {}", base_url, e)))?;

        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET request.
    pub async fn get(
        &self,
        endpoint: &str,
        params: Vec<(String, String)>,
        key: KeyKind,
    ) -> Result<Value> {
        self.execute(Request::get(endpoint).with_query(params).with_key(key))
            .await
    }

    /// Issues a POST request.
    pub async fn post(&self, endpoint: &str, body: Option<Value>, key: KeyKind) -> Result<Value> {
        self.execute(Request::post(endpoint, body).with_key(key)).await
    }

    /// Issues a PUT request with the secret key.
    pub async fn put(&self, endpoint: &str, body: Option<Value>) -> Result<Value> {
        self.execute(Request::put(endpoint, body)).await
    }

    /// Issues a PATCH request with the secret key.
    pub async fn patch(&self, endpoint: &str, body: Option<Value>) -> Result<Value> {
        self.execute(Request::patch(endpoint, body)).await
    }

    /// Issues a DELETE request with the secret key.
    pub async fn delete(&self, endpoint: &str) -> Result<Value> {
        self.execute(Request::delete(endpoint)).await
    }

    /// Sends a request and returns the decoded body of a 2xx response.
    ///
    /// Non-success statuses and transport failures are mapped onto [`Error`];
    /// nothing is retried.
    pub async fn execute(&self, request: Request) -> Result<Value> {
        let url = self.url_for(&request.endpoint)?;
        let mut headers = auth_headers(self.credentials.as_ref(), request.key)?;
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method, url).headers(headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(Error::from_transport)?;
        self.handle_response(response).await
    }

    fn url_for(&self, endpoint: &str) -> Result<Url> {
        let url = if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        };
        Url::parse(&url).map_err(|e| Error::Request(format!("invalid URL '{}': {}", url, e)))
    }

    /// Handles the API response.
    async fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await;

        if !status.is_success() {
            // The status alone decides the error; an unreadable body counts as empty.
            let body = body.unwrap_or_else(|e| {
                debug!("failed to read error body: {}", e);
                Default::default()
            });
            debug!("response status={} bytes={}", status.as_u16(), body.len());
            return Err(Error::from_status(status.as_u16(), &body, retry_after));
        }

        let body = body.map_err(Error::NoResponse)?;
        debug!("response status={} bytes={}", status.as_u16(), body.len());
        Ok(body_value(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ApiKeys;

    fn client(base_url: &str) -> Result<HttpClient> {
        HttpClient::new(
            base_url,
            Arc::new(ApiKeys::secret("sk_test")),
            Duration::from_secs(30),
        )
    }

    #[test]
    fn test_request_defaults() {
        let req = Request::post("/payments/pay_1/voids", None);
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.body(), Some(&json!({})));
        assert_eq!(req.key(), KeyKind::Secret);

        let req = Request::get("/payments").with_query(vec![("limit".into(), "10".into())]);
        assert!(req.body().is_none());
        assert_eq!(req.query().len(), 1);

        assert!(Request::delete("/customers/cus_1").body().is_none());
    }

    #[test]
    fn test_url_for() {
        let http = client("https://api.sandbox.checkout.com/").unwrap();
        assert_eq!(http.base_url(), "https://api.sandbox.checkout.com");
        assert_eq!(
            http.url_for("/payments").unwrap().as_str(),
            "https://api.sandbox.checkout.com/payments"
        );
        assert_eq!(
            http.url_for("balances").unwrap().as_str(),
            "https://api.sandbox.checkout.com/balances"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = client("not a url").err().unwrap();
        assert!(matches!(err, Error::Request(_)));
        assert!(err.to_string().starts_with("Request error: "));
    }
}
