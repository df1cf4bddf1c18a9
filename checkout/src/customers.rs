//! Customers service.

use std::sync::Arc;

use serde_json::Value;

use super::{auth::KeyKind, error::Result, http::HttpClient};

/// Customer management.
pub struct CustomerService {
    http: Arc<HttpClient>,
}

impl CustomerService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn create(&self, body: Value) -> Result<Value> {
        self.http.post("/customers", Some(body), KeyKind::Secret).await
    }

    pub async fn get(&self, id: &str) -> Result<Value> {
        self.http
            .get(&format!("/customers/{}", id), Vec::new(), KeyKind::Secret)
            .await
    }

    pub async fn update(&self, id: &str, body: Value) -> Result<Value> {
        self.http.patch(&format!("/customers/{}", id), Some(body)).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("/customers/{}", id)).await?;
        Ok(())
    }
}
