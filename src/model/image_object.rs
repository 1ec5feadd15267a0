//! Image object

use super::object::{LabelObject, ObjectCommon};
use super::text_node::TextNode;
use crate::types::{Distance, Matrix};

/// Embedded image data carried by an [`ImageObject`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImagePayload {
    /// No data; the object renders as an empty placeholder
    #[default]
    Empty,
    /// Raster data (PNG, JPEG, ...), kept as the original encoded bytes
    Raster { format: String, data: Vec<u8> },
    /// Vector data, kept as the SVG source bytes
    Svg { data: Vec<u8> },
}

impl ImagePayload {
    /// Payload format tag from a file name extension.
    pub fn format_for(filename: &str) -> &'static str {
        let ext = filename.rsplit('.').next().unwrap_or("");
        match ext.to_ascii_lowercase().as_str() {
            "png" => "PNG",
            "jpg" | "jpeg" => "JPEG",
            "gif" => "GIF",
            "bmp" => "BMP",
            "svg" => "SVG",
            _ => "PNG",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ImagePayload::Empty)
    }
}

/// An image placed on the label. The source is a [`TextNode`] — a literal
/// file name or a merge field whose record value names the file — plus an
/// optional embedded payload for self-contained documents.
#[derive(Debug, Clone)]
pub struct ImageObject {
    pub common: ObjectCommon,
    pub filename: TextNode,
    pub payload: ImagePayload,
}

impl ImageObject {
    pub fn new() -> Self {
        ImageObject {
            common: ObjectCommon::new(),
            filename: TextNode::default(),
            payload: ImagePayload::Empty,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_geometry(
        x0: Distance,
        y0: Distance,
        w: Distance,
        h: Distance,
        lock_aspect_ratio: bool,
        filename: TextNode,
        matrix: Matrix,
    ) -> Self {
        let mut object = ImageObject::new();
        object.common.x0 = x0;
        object.common.y0 = y0;
        object.common.w = w;
        object.common.h = h;
        object.common.lock_aspect_ratio = lock_aspect_ratio;
        object.common.matrix = matrix;
        object.filename = filename;
        object
    }

    /// Construct from in-memory raster data, to be embedded on save.
    pub fn from_raster(filename: impl Into<String>, format: impl Into<String>, data: Vec<u8>) -> Self {
        let mut object = ImageObject::new();
        object.filename = TextNode::literal(filename);
        object.payload = ImagePayload::Raster {
            format: format.into(),
            data,
        };
        object
    }

    /// Construct from in-memory SVG source, to be embedded on save.
    pub fn from_svg(filename: impl Into<String>, data: Vec<u8>) -> Self {
        let mut object = ImageObject::new();
        object.filename = TextNode::literal(filename);
        object.payload = ImagePayload::Svg { data };
        object
    }

    pub fn has_payload(&self) -> bool {
        !self.payload.is_empty()
    }

    /// Encoded raster bytes, when the payload is raster data.
    pub fn raster(&self) -> Option<(&str, &[u8])> {
        match &self.payload {
            ImagePayload::Raster { format, data } => Some((format, data)),
            _ => None,
        }
    }

    /// SVG source bytes, when the payload is vector data.
    pub fn svg(&self) -> Option<&[u8]> {
        match &self.payload {
            ImagePayload::Svg { data } => Some(data),
            _ => None,
        }
    }
}

impl Default for ImageObject {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelObject for ImageObject {
    fn common(&self) -> &ObjectCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ObjectCommon {
        &mut self.common
    }

    fn type_name(&self) -> &'static str {
        "Image"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for() {
        assert_eq!(ImagePayload::format_for("a.png"), "PNG");
        assert_eq!(ImagePayload::format_for("a.JPG"), "JPEG");
        assert_eq!(ImagePayload::format_for("logo.svg"), "SVG");
        assert_eq!(ImagePayload::format_for("noext"), "PNG");
    }

    #[test]
    fn test_payload_accessors() {
        let object = ImageObject::from_raster("a.png", "PNG", vec![1, 2, 3]);
        assert!(object.has_payload());
        assert_eq!(object.raster(), Some(("PNG", &[1u8, 2, 3][..])));
        assert_eq!(object.svg(), None);

        let object = ImageObject::from_svg("a.svg", b"<svg/>".to_vec());
        assert_eq!(object.svg(), Some(&b"<svg/>"[..]));
    }
}
