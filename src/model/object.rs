//! Label object types and traits
//!
//! The variant set is closed: every object on a label is one of
//! {Box, Ellipse, Line, Image, Text, Barcode}. Serialization and capability
//! queries dispatch on the variant tag; shared attributes live in
//! [`ObjectCommon`] behind the [`LabelObject`] trait.

use crate::types::{ColorNode, Distance, Matrix, ObjectId};

use super::barcode_object::BarcodeObject;
use super::box_object::BoxObject;
use super::ellipse_object::EllipseObject;
use super::image_object::ImageObject;
use super::line_object::LineObject;
use super::text_object::TextObject;

/// Common object data shared by all variants
#[derive(Debug, Clone)]
pub struct ObjectCommon {
    /// Process-unique id, regenerated on every deserialize
    pub id: ObjectId,
    /// Position of the reference corner
    pub x0: Distance,
    pub y0: Distance,
    /// Size
    pub w: Distance,
    pub h: Distance,
    /// Keep w/h ratio fixed during interactive resize
    pub lock_aspect_ratio: bool,
    /// 2D affine transform applied about the object origin
    pub matrix: Matrix,
    /// Shadow enable flag. Offsets/opacity/color persist even while the
    /// shadow is disabled.
    pub shadow: bool,
    pub shadow_x: Distance,
    pub shadow_y: Distance,
    pub shadow_opacity: f64,
    pub shadow_color: ColorNode,
    /// Transient editor selection state, never serialized
    pub selected: bool,
}

impl ObjectCommon {
    pub fn new() -> Self {
        ObjectCommon {
            id: ObjectId::next(),
            x0: Distance::ZERO,
            y0: Distance::ZERO,
            w: Distance::ZERO,
            h: Distance::ZERO,
            lock_aspect_ratio: false,
            matrix: Matrix::IDENTITY,
            shadow: false,
            shadow_x: Distance::pt(3.6),
            shadow_y: Distance::pt(3.6),
            shadow_opacity: 0.5,
            shadow_color: ColorNode::default(),
            selected: false,
        }
    }

    /// Copy for object duplication: same attributes, fresh id, unselected.
    pub fn duplicated(&self) -> Self {
        ObjectCommon {
            id: ObjectId::next(),
            selected: false,
            ..self.clone()
        }
    }
}

impl Default for ObjectCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Base trait for all label objects
pub trait LabelObject {
    /// Shared object data
    fn common(&self) -> &ObjectCommon;

    /// Shared object data, mutable
    fn common_mut(&mut self) -> &mut ObjectCommon;

    /// Variant name as used in documents
    fn type_name(&self) -> &'static str;

    /// Does the editor show text properties for this object?
    fn can_text(&self) -> bool {
        false
    }

    /// Does the editor show fill properties for this object?
    fn can_fill(&self) -> bool {
        false
    }

    /// Does the editor show line color properties for this object?
    fn can_line_color(&self) -> bool {
        false
    }

    /// Does the editor show line width properties for this object?
    fn can_line_width(&self) -> bool {
        false
    }
}

/// Enumeration of all object variants for type-safe storage
#[derive(Debug)]
pub enum ObjectType {
    Box(BoxObject),
    Ellipse(EllipseObject),
    Line(LineObject),
    Image(ImageObject),
    Text(TextObject),
    Barcode(BarcodeObject),
}

impl ObjectType {
    /// Borrow as the common object trait
    pub fn as_object(&self) -> &dyn LabelObject {
        match self {
            ObjectType::Box(o) => o,
            ObjectType::Ellipse(o) => o,
            ObjectType::Line(o) => o,
            ObjectType::Image(o) => o,
            ObjectType::Text(o) => o,
            ObjectType::Barcode(o) => o,
        }
    }

    /// Borrow as the common object trait, mutable
    pub fn as_object_mut(&mut self) -> &mut dyn LabelObject {
        match self {
            ObjectType::Box(o) => o,
            ObjectType::Ellipse(o) => o,
            ObjectType::Line(o) => o,
            ObjectType::Image(o) => o,
            ObjectType::Text(o) => o,
            ObjectType::Barcode(o) => o,
        }
    }

    pub fn common(&self) -> &ObjectCommon {
        self.as_object().common()
    }

    pub fn common_mut(&mut self) -> &mut ObjectCommon {
        self.as_object_mut().common_mut()
    }

    pub fn id(&self) -> ObjectId {
        self.common().id
    }

    pub fn type_name(&self) -> &'static str {
        self.as_object().type_name()
    }

    pub fn can_text(&self) -> bool {
        self.as_object().can_text()
    }

    pub fn can_fill(&self) -> bool {
        self.as_object().can_fill()
    }

    pub fn can_line_color(&self) -> bool {
        self.as_object().can_line_color()
    }

    pub fn can_line_width(&self) -> bool {
        self.as_object().can_line_width()
    }

    /// Duplicate with a fresh id (copy/paste, array tools).
    pub fn duplicate(&self) -> ObjectType {
        let mut copy = match self {
            ObjectType::Box(o) => ObjectType::Box(o.clone()),
            ObjectType::Ellipse(o) => ObjectType::Ellipse(o.clone()),
            ObjectType::Line(o) => ObjectType::Line(o.clone()),
            ObjectType::Image(o) => ObjectType::Image(o.clone()),
            ObjectType::Text(o) => ObjectType::Text(o.clone()),
            ObjectType::Barcode(o) => ObjectType::Barcode(o.clone()),
        };
        let common = copy.common_mut();
        common.id = ObjectId::next();
        common.selected = false;
        copy
    }
}
