//! Parameters captured by a successful match
//!
//! Values are the raw segment text from the location, never percent-decoded.

use crate::error::ParamError;
use crate::pattern::REST_PARAM;
use std::collections::HashMap;
use std::str::FromStr;

/// Named captures produced by a [`Matcher`](crate::Matcher).
///
/// # Example
///
/// ```
/// use hash_router::RouteParams;
///
/// // Pattern: /users/:id
/// // Location: /users/123
/// let mut params = RouteParams::new();
/// params.insert("id", "123");
///
/// assert_eq!(params.get("id"), Some("123"));
/// assert_eq!(params.get_as::<u32>("id"), Some(123));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing map
    pub fn from_map(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Raw captured text for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Text captured by a trailing wildcard, if the pattern had one.
    pub fn rest(&self) -> Option<&str> {
        self.get(REST_PARAM)
    }

    /// Parse a parameter, returning `None` when it is absent or unparsable.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Parse a parameter, reporting why it could not be produced.
    ///
    /// ```
    /// use hash_router::{ParamError, RouteParams};
    ///
    /// let params: RouteParams = [("page", "x")].into_iter().collect();
    /// assert!(matches!(params.require::<u32>("page"), Err(ParamError::Invalid { .. })));
    /// assert!(matches!(params.require::<u32>("id"), Err(ParamError::Missing { .. })));
    /// ```
    pub fn require<T>(&self, key: &str) -> Result<T, ParamError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.params.get(key).ok_or_else(|| ParamError::Missing {
            name: key.to_string(),
        })?;

        value.parse().map_err(|e: T::Err| ParamError::Invalid {
            name: key.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })
    }

    /// Record a capture, replacing any earlier value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Check if a capture exists
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Underlying map
    pub fn all(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Iterate over all captures
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether nothing was captured
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of captures
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_params_basic() {
        let mut params = RouteParams::new();
        params.insert("id", "123");

        assert_eq!(params.get("id"), Some("123"));
        assert!(params.contains("id"));
        assert!(!params.contains("missing"));
    }

    #[test]
    fn test_route_params_get_as() {
        let params: RouteParams = [("id", "123"), ("active", "true")].into_iter().collect();

        assert_eq!(params.get_as::<i32>("id"), Some(123));
        assert_eq!(params.get_as::<bool>("active"), Some(true));
        assert_eq!(params.get_as::<i32>("active"), None);
        assert_eq!(params.get_as::<i32>("missing"), None);
    }

    #[test]
    fn test_require_reports_missing_and_invalid() {
        let params: RouteParams = [("id", "42"), ("page", "two")].into_iter().collect();

        assert_eq!(params.require::<u64>("id"), Ok(42));

        match params.require::<u32>("page") {
            Err(ParamError::Invalid { name, value, .. }) => {
                assert_eq!(name, "page");
                assert_eq!(value, "two");
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }

        assert_eq!(
            params.require::<u32>("slug"),
            Err(ParamError::Missing {
                name: "slug".to_string()
            })
        );
    }

    #[test]
    fn test_rest_uses_reserved_key() {
        let mut params = RouteParams::new();
        assert_eq!(params.rest(), None);

        params.insert(REST_PARAM, "a/b/c");
        assert_eq!(params.rest(), Some("a/b/c"));
    }

    #[test]
    fn test_route_params_empty() {
        let params = RouteParams::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert_eq!(params.iter().count(), 0);
    }
}
