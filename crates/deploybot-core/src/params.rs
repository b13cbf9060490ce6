//! Request parameters and the cleansing rule applied to them.
//!
//! A parameter is kept only if its value is non-null, or if it is a
//! non-empty array. Null scalars and empty arrays are dropped silently, so
//! an unset option never reaches DeployBot as `null` or `[]`. Empty strings,
//! `0` and `false` are values and are kept.

use serde_json::{Map, Value};

/// Ordered, cleansed request parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a value survives cleansing.
    pub fn keeps(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Array(items) => !items.is_empty(),
            _ => true,
        }
    }

    /// Insert a parameter if it survives cleansing.
    ///
    /// An existing entry with the same key is replaced in place. A dropped
    /// value leaves an existing entry untouched.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if !Self::keeps(&value) {
            return self;
        }

        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Builder form of [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flatten into query-string pairs.
    ///
    /// Strings go out unquoted, numbers and booleans in their JSON text form.
    /// Arrays become repeated `key[]` pairs and objects `key[field]` pairs.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.entries {
            push_query_pairs(key.clone(), value, &mut pairs);
        }
        pairs
    }

    /// The JSON object sent as a POST body.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self.entries.iter().cloned().collect();
        Value::Object(map)
    }
}

fn push_query_pairs(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push((key, s.clone())),
        Value::Array(items) => {
            for item in items {
                push_query_pairs(format!("{}[]", key), item, out);
            }
        }
        Value::Object(fields) => {
            for (field, item) in fields {
                push_query_pairs(format!("{}[{}]", key, field), item, out);
            }
        }
        other => out.push((key, other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_and_empty_arrays_are_dropped() {
        let params = Params::new()
            .with("limit", 50)
            .with("after", Value::Null)
            .with("tags", json!([]))
            .with("ids", json!([1, 2]));

        assert_eq!(params.len(), 2);
        assert!(params.contains("limit"));
        assert!(params.contains("ids"));
        assert!(!params.contains("after"));
        assert!(!params.contains("tags"));
    }

    #[test]
    fn test_empty_string_zero_and_false_are_kept() {
        let params = Params::new()
            .with("comment", "")
            .with("limit", 0)
            .with("deploy_from_scratch", false);

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("comment"), Some(&json!("")));
        assert_eq!(params.get("limit"), Some(&json!(0)));
        assert_eq!(params.get("deploy_from_scratch"), Some(&json!(false)));
    }

    #[test]
    fn test_options_drop_when_none() {
        let after: Option<String> = None;
        let comment: Option<&str> = Some("deploy");
        let params = Params::new().with("after", after).with("comment", comment);

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("comment"), Some(&json!("deploy")));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = Params::new().with("a", 1).with("b", 2);
        params.insert("a", 3);
        params.insert("b", Value::Null);

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&json!(3)));
        assert_eq!(params.get("b"), Some(&json!(2)));
    }

    #[test]
    fn test_query_pairs() {
        let params = Params::new()
            .with("repository_id", 12)
            .with("after", "cursor-1")
            .with("ids", json!(["a", "b"]))
            .with("flag", true);

        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("repository_id".to_string(), "12".to_string()),
                ("after".to_string(), "cursor-1".to_string()),
                ("ids[]".to_string(), "a".to_string()),
                ("ids[]".to_string(), "b".to_string()),
                ("flag".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_json_body() {
        let params = Params::new()
            .with("environment_id", "env123")
            .with("comment", "deploy");

        assert_eq!(
            params.to_json(),
            json!({"environment_id": "env123", "comment": "deploy"})
        );
    }
}
