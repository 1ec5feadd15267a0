//! Literal-or-field content node

use crate::merge::Record;

/// A content value that is either a literal string or a reference to a
/// merge field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextNode {
    field_flag: bool,
    data: String,
}

impl TextNode {
    /// Create a node. `field_flag` marks `data` as a merge-field name
    /// rather than literal text.
    pub fn new(field_flag: bool, data: impl Into<String>) -> Self {
        TextNode {
            field_flag,
            data: data.into(),
        }
    }

    /// A literal node.
    pub fn literal(data: impl Into<String>) -> Self {
        TextNode::new(false, data)
    }

    /// A field-reference node.
    pub fn field(name: impl Into<String>) -> Self {
        TextNode::new(true, name)
    }

    /// Does this node reference a merge field?
    pub fn is_field(&self) -> bool {
        self.field_flag
    }

    pub fn set_field(&mut self, field_flag: bool) {
        self.field_flag = field_flag;
    }

    /// Literal text or field name, depending on [`is_field`](Self::is_field).
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn set_data(&mut self, data: impl Into<String>) {
        self.data = data.into();
    }

    /// Resolve to text. A field reference without a record renders as the
    /// `${name}` placeholder; a reference to a field absent from the record
    /// renders empty.
    pub fn text(&self, record: Option<&Record>) -> String {
        if !self.field_flag {
            return self.data.clone();
        }
        match record {
            None => format!("${{{}}}", self.data),
            Some(record) => record.get(&self.data).unwrap_or("").to_string(),
        }
    }

    /// Is this a field reference that resolves to an empty value?
    pub fn is_empty_field(&self, record: Option<&Record>) -> bool {
        if let (true, Some(record)) = (self.field_flag, record) {
            if record.contains(&self.data) {
                return record.get(&self.data).is_some_and(str::is_empty);
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        let mut r = Record::new();
        r.insert("name".to_string(), "Alice".to_string());
        r.insert("empty".to_string(), String::new());
        r
    }

    #[test]
    fn test_literal() {
        let node = TextNode::literal("hello");
        assert!(!node.is_field());
        assert_eq!(node.text(None), "hello");
        assert_eq!(node.text(Some(&record())), "hello");
    }

    #[test]
    fn test_field_without_record() {
        let node = TextNode::field("name");
        assert_eq!(node.text(None), "${name}");
    }

    #[test]
    fn test_field_with_record() {
        let node = TextNode::field("name");
        assert_eq!(node.text(Some(&record())), "Alice");
    }

    #[test]
    fn test_field_absent_from_record() {
        let node = TextNode::field("missing");
        assert_eq!(node.text(Some(&record())), "");
    }

    #[test]
    fn test_empty_field() {
        assert!(TextNode::field("empty").is_empty_field(Some(&record())));
        assert!(!TextNode::field("name").is_empty_field(Some(&record())));
        assert!(!TextNode::field("missing").is_empty_field(Some(&record())));
        assert!(!TextNode::literal("").is_empty_field(Some(&record())));
    }
}
