//! Sources service.

use std::sync::Arc;

use serde_json::Value;

use super::{auth::KeyKind, error::Result, http::HttpClient};

/// Payment source management.
pub struct SourceService {
    http: Arc<HttpClient>,
}

impl SourceService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Adds a payment source.
    pub async fn create(&self, body: Value) -> Result<Value> {
        self.http.post("/sources", Some(body), KeyKind::Secret).await
    }
}
