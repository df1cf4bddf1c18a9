//! Payments service.

use std::sync::Arc;

use serde_json::Value;

use super::{auth::KeyKind, error::Result, http::HttpClient, types::ListQuery};

/// Payment processing: requests, captures, voids, refunds and action history.
pub struct PaymentService {
    http: Arc<HttpClient>,
}

impl PaymentService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Requests a payment.
    pub async fn create(&self, body: Value) -> Result<Value> {
        self.http.post("/payments", Some(body), KeyKind::Secret).await
    }

    /// Gets payment details.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.http
            .get(&format!("/payments/{}", id), Vec::new(), KeyKind::Secret)
            .await
    }

    /// Lists payments. Supports a `reference` filter.
    pub async fn list(&self, query: &ListQuery) -> Result<Value> {
        self.http
            .get("/payments", query.to_pairs(), KeyKind::Secret)
            .await
    }

    /// Captures an authorized payment. `None` captures the full amount.
    pub async fn capture(&self, id: &str, body: Option<Value>) -> Result<Value> {
        self.http
            .post(&format!("/payments/{}/captures", id), body, KeyKind::Secret)
            .await
    }

    /// Voids an authorized payment.
    pub async fn void(&self, id: &str, body: Option<Value>) -> Result<Value> {
        self.http
            .post(&format!("/payments/{}/voids", id), body, KeyKind::Secret)
            .await
    }

    /// Refunds a captured payment. `None` refunds the full amount.
    pub async fn refund(&self, id: &str, body: Option<Value>) -> Result<Value> {
        self.http
            .post(&format!("/payments/{}/refunds", id), body, KeyKind::Secret)
            .await
    }

    /// Gets the actions performed on a payment.
    pub async fn actions(&self, id: &str) -> Result<Value> {
        self.http
            .get(&format!("/payments/{}/actions", id), Vec::new(), KeyKind::Secret)
            .await
    }
}
