//! Shared request types.

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: u32 = 10;

/// Default offset for list endpoints.
pub const DEFAULT_SKIP: u32 = 0;

/// Query for list endpoints: `limit`, `skip` and optional filters.
///
/// Only one page is requested; following pages is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: u32,
    pub skip: u32,
    filters: Vec<(String, String)>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: DEFAULT_SKIP,
            filters: Vec::new(),
        }
    }
}

impl ListQuery {
    /// Creates a query for the given page.
    pub fn new(limit: u32, skip: u32) -> Self {
        Self {
            limit,
            skip,
            filters: Vec::new(),
        }
    }

    /// Adds a filter when a value is present. Empty values are ignored.
    pub fn filter(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.filters.push((name.to_string(), v.to_string()));
        }
        self
    }

    /// Returns the query as string pairs, page parameters first.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("skip".to_string(), self.skip.to_string()),
        ];
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_pairs() {
        let q = ListQuery::new(25, 50)
            .filter("reference", Some("ORD-1"))
            .filter("status", None)
            .filter("payment_id", Some(""));
        assert_eq!(
            q.to_pairs(),
            vec![
                ("limit".to_string(), "25".to_string()),
                ("skip".to_string(), "50".to_string()),
                ("reference".to_string(), "ORD-1".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_query_default() {
        let q = ListQuery::default();
        assert_eq!(q.limit, 10);
        assert_eq!(q.skip, 0);
    }
}
