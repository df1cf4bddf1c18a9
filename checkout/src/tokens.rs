//! Tokens service.

use std::sync::Arc;

use serde_json::Value;

use super::{auth::KeyKind, error::Result, http::HttpClient};

/// Payment tokenization.
pub struct TokenService {
    http: Arc<HttpClient>,
}

impl TokenService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates a payment token. Authenticated with the public key.
    pub async fn create(&self, body: Value) -> Result<Value> {
        self.http.post("/tokens", Some(body), KeyKind::Public).await
    }
}
