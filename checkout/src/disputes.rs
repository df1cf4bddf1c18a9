//! Disputes service.

use std::sync::Arc;

use serde_json::Value;

use super::{auth::KeyKind, error::Result, http::HttpClient, types::ListQuery};

/// Dispute (chargeback) management.
pub struct DisputeService {
    http: Arc<HttpClient>,
}

impl DisputeService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists disputes. Supports a `status` filter.
    pub async fn list(&self, query: &ListQuery) -> Result<Value> {
        self.http
            .get("/disputes", query.to_pairs(), KeyKind::Secret)
            .await
    }

    /// Gets dispute details.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.http
            .get(&format!("/disputes/{}", id), Vec::new(), KeyKind::Secret)
            .await
    }

    /// Accepts a dispute. The request body is empty.
    pub async fn accept(&self, id: &str) -> Result<Value> {
        self.http
            .post(&format!("/disputes/{}/accept", id), None, KeyKind::Secret)
            .await
    }

    /// Provides evidence for a dispute. The evidence document is passed
    /// through as-is.
    pub async fn provide_evidence(&self, id: &str, evidence: Value) -> Result<Value> {
        self.http
            .put(&format!("/disputes/{}/evidence", id), Some(evidence))
            .await
    }
}
