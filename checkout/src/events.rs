//! Events service.

use std::sync::Arc;

use serde_json::Value;

use super::{auth::KeyKind, error::Result, http::HttpClient, types::ListQuery};

/// Event history.
pub struct EventService {
    http: Arc<HttpClient>,
}

impl EventService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists events. Supports a `payment_id` filter.
    pub async fn list(&self, query: &ListQuery) -> Result<Value> {
        self.http
            .get("/events", query.to_pairs(), KeyKind::Secret)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Value> {
        self.http
            .get(&format!("/events/{}", id), Vec::new(), KeyKind::Secret)
            .await
    }

    /// Lists the event types available to the account.
    pub async fn types(&self) -> Result<Value> {
        self.http.get("/event-types", Vec::new(), KeyKind::Secret).await
    }
}
