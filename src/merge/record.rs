//! One row of merge-source data

use indexmap::IndexMap;

/// A single record: field name → value, in source column order.
///
/// Field lookup is by exact key, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Record {
            fields: IndexMap::new(),
        }
    }

    /// Set a field value. Replaces any existing value for the key,
    /// keeping the key's original position.
    pub fn insert(&mut self, key: String, value: String) {
        self.fields.insert(key, value);
    }

    /// Look up a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Does the record contain the field?
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterate fields in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Field names in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Is the record empty?
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut r = Record::new();
        r.insert("Name".to_string(), "Alice".to_string());
        assert_eq!(r.get("Name"), Some("Alice"));
        assert_eq!(r.get("name"), None);
        assert!(r.contains("Name"));
        assert!(!r.contains("name"));
    }

    #[test]
    fn test_order_preserved() {
        let r: Record = [("b", "1"), ("a", "2"), ("c", "3")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let keys: Vec<&str> = r.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
