//! Cache keys: resource name + serialized parameters.

use std::collections::BTreeMap;
use std::fmt;

/// Identifies one cache entry.
///
/// Parameters are kept sorted so two keys built in a different order are equal,
/// and a filter change always produces a different key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    resource: String,
    params: BTreeMap<String, String>,
}

impl QueryKey {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    /// Adds the parameter only when present.
    pub fn with_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Prefix match: same resource and every filter parameter present with the same value.
    pub fn matches(&self, filter: &QueryKey) -> bool {
        self.resource == filter.resource
            && filter
                .params
                .iter()
                .all(|(k, v)| self.params.get(k) == Some(v))
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resource)?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{k}={v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_order_does_not_matter() {
        let a = QueryKey::new("words").with("search", "kala").with("limit", 200);
        let b = QueryKey::new("words").with("limit", 200).with("search", "kala");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "words?limit=200&search=kala");
    }

    #[test]
    fn test_extra_param_is_a_distinct_key() {
        let a = QueryKey::new("words").with("search", "kala");
        let b = QueryKey::new("words")
            .with("search", "kala")
            .with("word_type", "noun");
        assert_ne!(a, b);
    }

    #[test]
    fn test_prefix_matching() {
        let list = QueryKey::new("words")
            .with("search", "kala")
            .with("word_type", "noun");
        assert!(list.matches(&QueryKey::new("words")));
        assert!(list.matches(&QueryKey::new("words").with("search", "kala")));
        assert!(!list.matches(&QueryKey::new("words").with("search", "talo")));
        assert!(!list.matches(&QueryKey::new("concepts")));
    }

    #[test]
    fn test_with_opt_skips_none() {
        let key = QueryKey::new("user_words")
            .with("user", "user-1")
            .with_opt::<String>("status", None);
        assert_eq!(key.param("status"), None);
        assert_eq!(key.param("user"), Some("user-1"));
    }
}
