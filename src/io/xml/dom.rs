//! Minimal element tree over the streaming XML reader
//!
//! The codec works on a parse tree rather than raw events so sections can
//! be consumed in any order (embedded data before or after the objects
//! that reference it). Leaf text is kept verbatim, whitespace included;
//! whitespace-only text on elements that contain child elements is layout
//! indentation and is dropped after the tree is built.

use crate::error::{LabelError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// One parsed XML element.
#[derive(Debug, Clone, Default)]
pub struct XmlNode {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parse a buffer into its root element.
    pub fn parse(buf: &[u8]) -> Result<XmlNode> {
        let mut reader = Reader::from_reader(buf);
        let mut event_buf = Vec::new();
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event_into(&mut event_buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(node_from_start(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let node = node_from_start(e)?;
                    attach(&mut stack, &mut root, node)?;
                }
                Ok(Event::End(_)) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| LabelError::Parse("unbalanced end tag".to_string()))?;
                    attach(&mut stack, &mut root, node)?;
                }
                Ok(Event::Text(ref e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| LabelError::Parse(e.to_string()))?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(e));
                    }
                }
                Ok(Event::Eof) => break,
                // Declarations, comments and processing instructions carry
                // no document content
                Ok(_) => {}
                Err(e) => {
                    return Err(LabelError::Parse(format!(
                        "XML error at byte {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
            }
            event_buf.clear();
        }

        if !stack.is_empty() {
            return Err(LabelError::Parse("unterminated element".to_string()));
        }
        let mut root =
            root.ok_or_else(|| LabelError::InvalidFormat("empty document".to_string()))?;
        strip_layout_whitespace(&mut root);
        Ok(root)
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |c| c.name == name)
    }
}

fn node_from_start(e: &quick_xml::events::BytesStart<'_>) -> Result<XmlNode> {
    let mut node = XmlNode {
        name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
        ..XmlNode::default()
    };
    for attr in e.attributes() {
        let attr = attr.map_err(|e| LabelError::Parse(format!("bad attribute: {}", e)))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| LabelError::Parse(e.to_string()))?
            .into_owned();
        node.attrs.push((key, value));
    }
    Ok(node)
}

/// Indentation between child elements arrives as whitespace-only text on
/// the parent node. Leaf text is content and stays verbatim, so a
/// whitespace-only leaf (a text line of spaces) survives a round trip.
fn strip_layout_whitespace(node: &mut XmlNode) {
    if !node.children.is_empty() && node.text.trim().is_empty() {
        node.text.clear();
    }
    for child in &mut node.children {
        strip_layout_whitespace(child);
    }
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(node);
            Ok(())
        }
        None => Err(LabelError::InvalidFormat(
            "multiple root elements".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree() {
        let xml = br#"<?xml version="1.0"?>
<Root a="1" b="two &amp; three">
  <Child name="x"/>
  <Child name="y">text</Child>
</Root>"#;
        let root = XmlNode::parse(xml).unwrap();
        assert_eq!(root.name, "Root");
        assert_eq!(root.attr("a"), Some("1"));
        assert_eq!(root.attr("b"), Some("two & three"));
        assert_eq!(root.children_named("Child").count(), 2);
        assert_eq!(root.children[1].text, "text");
        assert!(root.child("Missing").is_none());
    }

    #[test]
    fn test_parse_keeps_inner_text_verbatim() {
        let xml = b"<Root><p>  indented line</p></Root>";
        let root = XmlNode::parse(xml).unwrap();
        assert_eq!(root.children[0].text, "  indented line");
    }

    #[test]
    fn test_leaf_whitespace_is_content() {
        let xml = b"<Root>\n  <p>   </p>\n  <q/>\n</Root>";
        let root = XmlNode::parse(xml).unwrap();
        // Indentation on the parent is layout, spaces in the leaf are data
        assert_eq!(root.text, "");
        assert_eq!(root.children[0].text, "   ");
        assert_eq!(root.children[1].text, "");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(XmlNode::parse(b"<Root><Open></Root>").is_err());
        assert!(XmlNode::parse(b"").is_err());
    }
}
