//! Color representation for label objects
//!
//! Colors are stored as 8-bit RGBA. Object color attributes are wrapped in a
//! [`ColorNode`], which may instead reference a merge field whose record
//! value supplies the color at render time.

use crate::merge::Record;
use std::fmt;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 255, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    /// Fully transparent black
    pub const NONE: Color = Color::from_rgba(0, 0, 0, 0);

    /// Create an opaque color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Create a color from RGBA values
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Is the color fully opaque?
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Hex form as written to documents: `#rrggbb`, or `#rrggbbaa` when
    /// the alpha channel is not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string.
    pub fn from_hex(s: &str) -> Option<Color> {
        let hex = s.strip_prefix('#')?;
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::from_rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A color value that is either a concrete color or a merge-field reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorNode {
    field_flag: bool,
    color: Color,
    key: String,
}

impl ColorNode {
    /// A concrete color
    pub fn from_color(color: Color) -> Self {
        ColorNode {
            field_flag: false,
            color,
            key: String::new(),
        }
    }

    /// A merge-field reference
    pub fn from_field(key: impl Into<String>) -> Self {
        ColorNode {
            field_flag: true,
            color: Color::BLACK,
            key: key.into(),
        }
    }

    /// Does this node reference a merge field?
    pub fn is_field(&self) -> bool {
        self.field_flag
    }

    /// The concrete color (meaningful when not a field reference)
    pub fn color(&self) -> Color {
        self.color
    }

    /// The merge-field key (meaningful when a field reference)
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolve against a record. A field reference whose record value does
    /// not parse as a color, or whose key is absent, resolves to black.
    pub fn resolve(&self, record: Option<&Record>) -> Color {
        if !self.field_flag {
            return self.color;
        }
        record
            .and_then(|r| r.get(&self.key))
            .and_then(Color::from_hex)
            .unwrap_or(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let c = Color::from_rgb(18, 52, 86);
        assert_eq!(c.to_hex(), "#123456");
        assert_eq!(Color::from_hex("#123456"), Some(c));

        let t = Color::from_rgba(18, 52, 86, 128);
        assert_eq!(t.to_hex(), "#12345680");
        assert_eq!(Color::from_hex("#12345680"), Some(t));
    }

    #[test]
    fn test_hex_invalid() {
        assert_eq!(Color::from_hex("123456"), None);
        assert_eq!(Color::from_hex("#12"), None);
        assert_eq!(Color::from_hex("#12345g"), None);
    }

    #[test]
    fn test_node_resolution() {
        let mut record = Record::new();
        record.insert("c".to_string(), "#ff0000".to_string());

        let literal = ColorNode::from_color(Color::BLUE);
        assert_eq!(literal.resolve(Some(&record)), Color::BLUE);

        let field = ColorNode::from_field("c");
        assert_eq!(field.resolve(Some(&record)), Color::RED);
        assert_eq!(field.resolve(None), Color::BLACK);

        let missing = ColorNode::from_field("nope");
        assert_eq!(missing.resolve(Some(&record)), Color::BLACK);
    }
}
