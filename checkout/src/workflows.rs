//! Workflows service.
//!
//! Webhook subscriptions are managed as workflows.

use std::sync::Arc;

use serde_json::Value;

use super::{auth::KeyKind, error::Result, http::HttpClient};

/// Workflow (webhook) management.
pub struct WorkflowService {
    http: Arc<HttpClient>,
}

impl WorkflowService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Value> {
        self.http.get("/workflows", Vec::new(), KeyKind::Secret).await
    }

    pub async fn create(&self, body: Value) -> Result<Value> {
        self.http.post("/workflows", Some(body), KeyKind::Secret).await
    }

    pub async fn get(&self, id: &str) -> Result<Value> {
        self.http
            .get(&format!("/workflows/{}", id), Vec::new(), KeyKind::Secret)
            .await
    }

    pub async fn update(&self, id: &str, body: Value) -> Result<Value> {
        self.http.patch(&format!("/workflows/{}", id), Some(body)).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("/workflows/{}", id)).await?;
        Ok(())
    }
}
