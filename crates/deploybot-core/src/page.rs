//! Pagination pass-through for list endpoints.

use crate::Params;

/// Default page size used by every list endpoint.
pub const DEFAULT_LIMIT: u32 = 50;

/// The `limit` and `after` cursor passed to a list endpoint.
///
/// The client never follows cursors itself: callers read the next cursor
/// from the previous response and hand it back through [`PageRequest::after`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub after: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            after: None,
        }
    }
}

impl PageRequest {
    pub fn new(limit: u32) -> Self {
        Self { limit, after: None }
    }

    /// Continue after the given cursor.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Append `limit` and, when set, `after`.
    pub fn apply(&self, params: &mut Params) {
        params.insert("limit", self.limit);
        params.insert("after", self.after.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_limit_is_fifty() {
        let mut params = Params::new();
        PageRequest::default().apply(&mut params);

        assert_eq!(params.get("limit"), Some(&json!(50)));
        assert!(!params.contains("after"));
    }

    #[test]
    fn test_cursor_is_passed_through() {
        let mut params = Params::new();
        PageRequest::new(10).after("abc").apply(&mut params);

        assert_eq!(params.get("limit"), Some(&json!(10)));
        assert_eq!(params.get("after"), Some(&json!("abc")));
    }
}
