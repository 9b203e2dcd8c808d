//! Object store port
//!
//! Objects are JSON documents addressed by bucket and key. Buckets are
//! created on first write.

use async_trait::async_trait;
use serde_json::Value;

use core_kernel::{DomainPort, HealthCheckable, PortError};

/// Key/value document storage grouped into buckets
#[async_trait]
pub trait CloudDataStore: DomainPort + HealthCheckable {
    /// Stores a JSON document, replacing any document under the same key
    async fn store_object(&self, bucket: &str, key: &str, value: String) -> Result<(), PortError>;

    /// Retrieves a document
    ///
    /// Returns `Ok(None)` when the key is absent, and also when the bucket
    /// or key is empty, in which case the backend is not consulted.
    async fn retrieve_object(&self, bucket: &str, key: &str) -> Result<Option<String>, PortError>;

    /// Returns every document in a bucket whose field at `field_path`
    /// renders as `value`, ordered by key
    ///
    /// Path segments are limited to ASCII letters, digits and `_`; any
    /// other segment is a `PortError::Validation`.
    async fn search(
        &self,
        bucket: &str,
        field_path: &[&str],
        value: &str,
    ) -> Result<Vec<String>, PortError>;
}

/// Text form of a JSON field as compared by `search`
///
/// Strings compare without their quotes; numbers and booleans by their
/// literal. Objects, arrays and null never match.
pub(crate) fn field_text(document: &Value, field_path: &[&str]) -> Option<String> {
    let field = field_path
        .iter()
        .try_fold(document, |current, segment| current.get(*segment))?;

    match field {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Renders `field_path` as a Postgres `text[]` literal such as
/// `'{address,uprn}'`
///
/// The literal is written into the query text so the planner can match it
/// against expression indexes, hence the restricted segment alphabet.
pub(crate) fn path_literal(field_path: &[&str]) -> Result<String, PortError> {
    if field_path.is_empty() {
        return Err(PortError::validation("search path must not be empty"));
    }
    let valid = |segment: &&str| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    };
    if let Some(bad) = field_path.iter().find(|segment| !valid(segment)) {
        return Err(PortError::validation(format!(
            "invalid search path segment {bad:?}"
        )));
    }
    Ok(format!("'{{{}}}'", field_path.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_literal_matches_index_expression() {
        assert_eq!(path_literal(&["address", "uprn"]).unwrap(), "'{address,uprn}'");
    }

    #[test]
    fn test_path_literal_rejects_unsafe_segments() {
        for path in [&[][..], &["address", "up'rn"][..], &["a,b"][..], &[""][..]] {
            let err = path_literal(path).unwrap_err();
            assert!(matches!(err, PortError::Validation { .. }));
        }
    }

    #[test]
    fn test_field_text_follows_path() {
        let doc = json!({"address": {"uprn": "1347459987", "region": "E"}});
        assert_eq!(field_text(&doc, &["address", "uprn"]).as_deref(), Some("1347459987"));
        assert_eq!(field_text(&doc, &["address", "postcode"]), None);
        assert_eq!(field_text(&doc, &["address"]), None);
    }

    #[test]
    fn test_field_text_renders_numbers() {
        let doc = json!({"address": {"uprn": 1347459987u64}});
        assert_eq!(field_text(&doc, &["address", "uprn"]).as_deref(), Some("1347459987"));
    }
}
