//! Balances service.

use std::sync::Arc;

use serde_json::Value;

use super::{auth::KeyKind, error::Result, http::HttpClient};

/// Account balances.
pub struct BalanceService {
    http: Arc<HttpClient>,
}

impl BalanceService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn get(&self) -> Result<Value> {
        self.http.get("/balances", Vec::new(), KeyKind::Secret).await
    }
}
