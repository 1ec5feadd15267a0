//! Text object

use super::object::{LabelObject, ObjectCommon};
use super::text_node::TextNode;
use crate::merge::Record;
use crate::types::{ColorNode, Distance, Matrix};

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn name(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }

    pub fn from_name(name: &str) -> Option<FontWeight> {
        match name {
            "normal" => Some(FontWeight::Normal),
            "bold" => Some(FontWeight::Bold),
            _ => None,
        }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HAlign {
    pub fn name(&self) -> &'static str {
        match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }

    pub fn from_name(name: &str) -> Option<HAlign> {
        match name {
            "left" => Some(HAlign::Left),
            "center" => Some(HAlign::Center),
            "right" => Some(HAlign::Right),
            _ => None,
        }
    }
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

impl VAlign {
    pub fn name(&self) -> &'static str {
        match self {
            VAlign::Top => "top",
            VAlign::Center => "center",
            VAlign::Bottom => "bottom",
        }
    }

    pub fn from_name(name: &str) -> Option<VAlign> {
        match name {
            "top" => Some(VAlign::Top),
            "center" => Some(VAlign::Center),
            "bottom" => Some(VAlign::Bottom),
            _ => None,
        }
    }
}

/// Line wrap behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    None,
    #[default]
    Word,
    Anywhere,
}

impl WrapMode {
    pub fn name(&self) -> &'static str {
        match self {
            WrapMode::None => "none",
            WrapMode::Word => "word",
            WrapMode::Anywhere => "anywhere",
        }
    }

    pub fn from_name(name: &str) -> Option<WrapMode> {
        match name {
            "none" => Some(WrapMode::None),
            "word" => Some(WrapMode::Word),
            "anywhere" => Some(WrapMode::Anywhere),
            _ => None,
        }
    }
}

/// A block of formatted text. The content is kept as the author's flat
/// string; `${name}` spans become field references at resolution time.
#[derive(Debug, Clone)]
pub struct TextObject {
    pub common: ObjectCommon,
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_italic: bool,
    pub font_underline: bool,
    pub text_color: ColorNode,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub wrap_mode: WrapMode,
    pub line_spacing: f64,
    pub auto_shrink: bool,
}

impl TextObject {
    pub fn new() -> Self {
        TextObject {
            common: ObjectCommon::new(),
            text: String::new(),
            font_family: "Sans".to_string(),
            font_size: 10.0,
            font_weight: FontWeight::Normal,
            font_italic: false,
            font_underline: false,
            text_color: ColorNode::default(),
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            wrap_mode: WrapMode::Word,
            line_spacing: 1.0,
            auto_shrink: false,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_geometry(
        x0: Distance,
        y0: Distance,
        w: Distance,
        h: Distance,
        lock_aspect_ratio: bool,
        text: impl Into<String>,
        matrix: Matrix,
    ) -> Self {
        let mut object = TextObject::new();
        object.common.x0 = x0;
        object.common.y0 = y0;
        object.common.w = w;
        object.common.h = h;
        object.common.lock_aspect_ratio = lock_aspect_ratio;
        object.common.matrix = matrix;
        object.text = text.into();
        object
    }

    /// Split the content into literal and `${field}` nodes. An unterminated
    /// `${` is treated as literal text.
    pub fn text_nodes(&self) -> Vec<TextNode> {
        let mut nodes = Vec::new();
        let mut rest = self.text.as_str();
        while let Some(start) = rest.find("${") {
            match rest[start..].find('}') {
                Some(end) => {
                    if start > 0 {
                        nodes.push(TextNode::literal(&rest[..start]));
                    }
                    nodes.push(TextNode::field(&rest[start + 2..start + end]));
                    rest = &rest[start + end + 1..];
                }
                None => break,
            }
        }
        if !rest.is_empty() {
            nodes.push(TextNode::literal(rest));
        }
        nodes
    }

    /// Content with merge fields resolved against `record`.
    pub fn merge_text(&self, record: Option<&Record>) -> String {
        self.text_nodes()
            .iter()
            .map(|node| node.text(record))
            .collect()
    }
}

impl Default for TextObject {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelObject for TextObject {
    fn common(&self) -> &ObjectCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ObjectCommon {
        &mut self.common
    }

    fn type_name(&self) -> &'static str {
        "Text"
    }

    fn can_text(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        let mut r = Record::new();
        r.insert("name".to_string(), "Alice".to_string());
        r
    }

    #[test]
    fn test_text_nodes() {
        let mut object = TextObject::new();
        object.text = "Hello ${name}!".to_string();
        let nodes = object.text_nodes();
        assert_eq!(nodes.len(), 3);
        assert!(!nodes[0].is_field());
        assert!(nodes[1].is_field());
        assert_eq!(nodes[1].data(), "name");
        assert_eq!(nodes[2].data(), "!");
    }

    #[test]
    fn test_merge_text() {
        let mut object = TextObject::new();
        object.text = "Hello ${name}!".to_string();
        assert_eq!(object.merge_text(Some(&record())), "Hello Alice!");
        assert_eq!(object.merge_text(None), "Hello ${name}!");
    }

    #[test]
    fn test_unterminated_field_is_literal() {
        let mut object = TextObject::new();
        object.text = "Oops ${name".to_string();
        assert_eq!(object.merge_text(Some(&record())), "Oops ${name");
    }
}
