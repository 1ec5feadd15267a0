//! Barcode object

use super::object::{LabelObject, ObjectCommon};
use super::text_node::TextNode;
use crate::barcode::{self, Vectorized};
use crate::merge::Record;
use crate::types::{ColorNode, Distance, Matrix};

/// A barcode bound to literal data or a merge field.
#[derive(Debug, Clone)]
pub struct BarcodeObject {
    pub common: ObjectCommon,
    pub style_id: String,
    pub text_flag: bool,
    pub checksum_flag: bool,
    pub bc_data: TextNode,
    pub bc_color: ColorNode,
    /// Digits of placeholder data when `bc_data` is a field reference
    pub format_digits: u32,
}

impl BarcodeObject {
    pub fn new() -> Self {
        let style = barcode::default_style();
        BarcodeObject {
            common: ObjectCommon::new(),
            format_digits: style.preferred_digits,
            style_id: style.id,
            text_flag: true,
            checksum_flag: true,
            bc_data: TextNode::default(),
            bc_color: ColorNode::default(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_geometry(
        x0: Distance,
        y0: Distance,
        w: Distance,
        h: Distance,
        lock_aspect_ratio: bool,
        style_id: impl Into<String>,
        text_flag: bool,
        checksum_flag: bool,
        bc_data: TextNode,
        bc_color: ColorNode,
        matrix: Matrix,
    ) -> Self {
        let mut object = BarcodeObject::new();
        object.common.x0 = x0;
        object.common.y0 = y0;
        object.common.w = w;
        object.common.h = h;
        object.common.lock_aspect_ratio = lock_aspect_ratio;
        object.common.matrix = matrix;
        object.style_id = style_id.into();
        object.text_flag = text_flag;
        object.checksum_flag = checksum_flag;
        object.bc_data = bc_data;
        object.bc_color = bc_color;
        object.update_size();
        object
    }

    /// Data used for sizing and preview: literal data, or placeholder
    /// digits when bound to a merge field.
    pub fn preview_data(&self) -> String {
        if self.bc_data.is_field() {
            "0".repeat(self.format_digits as usize)
        } else {
            self.bc_data.data().to_string()
        }
    }

    /// Is the current literal data acceptable for the style?
    pub fn is_data_valid(&self) -> bool {
        barcode::create(&self.style_id)
            .map(|symbology| symbology.validate(&self.preview_data()))
            .unwrap_or(false)
    }

    /// Clamp the object size to the symbology's minimum vector size.
    /// Idempotent: re-applying after a round trip changes nothing.
    pub fn update_size(&mut self) {
        if let Some(vector) = barcode::build(
            &self.style_id,
            &self.preview_data(),
            self.checksum_flag,
            self.text_flag,
            self.common.w.to_pt(),
            self.common.h.to_pt(),
        ) {
            self.common.w = Distance::pt(vector.width);
            self.common.h = Distance::pt(vector.height);
        }
    }

    /// Build render geometry, resolving field data against `record`.
    /// `None` when the style is unknown or the data is invalid.
    pub fn build_vector(&self, record: Option<&Record>) -> Option<Vectorized> {
        let data = if self.bc_data.is_field() && record.is_some() {
            self.bc_data.text(record)
        } else {
            self.preview_data()
        };
        barcode::build(
            &self.style_id,
            &data,
            self.checksum_flag,
            self.text_flag,
            self.common.w.to_pt(),
            self.common.h.to_pt(),
        )
    }
}

impl Default for BarcodeObject {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelObject for BarcodeObject {
    fn common(&self) -> &ObjectCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ObjectCommon {
        &mut self.common
    }

    fn type_name(&self) -> &'static str {
        "Barcode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_size_clamps_and_is_idempotent() {
        let mut object = BarcodeObject::new();
        object.bc_data = TextNode::literal("1234");
        object.common.w = Distance::pt(10.0);
        object.common.h = Distance::pt(5.0);
        object.update_size();
        let (w1, h1) = (object.common.w, object.common.h);
        assert!(w1.to_pt() > 10.0);
        assert!(h1.to_pt() >= 10.0);

        object.update_size();
        assert_eq!(object.common.w, w1);
        assert_eq!(object.common.h, h1);
    }

    #[test]
    fn test_invalid_data_leaves_size() {
        let mut object = BarcodeObject::new();
        object.bc_data = TextNode::literal("Ä");
        object.common.w = Distance::pt(50.0);
        object.update_size();
        assert_eq!(object.common.w.to_pt(), 50.0);
        assert!(!object.is_data_valid());
    }

    #[test]
    fn test_field_data_uses_placeholder() {
        let mut object = BarcodeObject::new();
        object.bc_data = TextNode::field("sku");
        object.format_digits = 6;
        assert_eq!(object.preview_data(), "000000");
        assert!(object.is_data_valid());
    }

    #[test]
    fn test_build_vector_with_record() {
        let mut object = BarcodeObject::new();
        object.bc_data = TextNode::field("sku");
        let mut record = Record::new();
        record.insert("sku".to_string(), "4711".to_string());
        assert!(object.build_vector(Some(&record)).is_some());
    }
}
