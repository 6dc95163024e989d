//! Query-string building for the list endpoints.

/// Default page number for list queries.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for list queries.
pub const DEFAULT_SIZE: u32 = 10;

/// Ordered query parameters: `page` and `size` are always present, optional
/// filters are trimmed and only appended when they still carry text. Empty
/// filters are omitted entirely, never sent as empty-string params.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub fn paged(page: u32, size: u32) -> Self {
        Self {
            pairs: vec![("page", page.to_string()), ("size", size.to_string())],
        }
    }

    /// Append a parameter unconditionally.
    pub fn set(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, value.into()));
        self
    }

    /// Append a filter parameter after trimming, skipping empty values.
    pub fn filter(mut self, key: &'static str, value: &str) -> Self {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            self.pairs.push((key, trimmed.to_string()));
        }
        self
    }

    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}
