//! Ellipse object

use super::object::{LabelObject, ObjectCommon};
use crate::types::{ColorNode, Distance, Matrix};

/// An ellipse inscribed in the object rectangle, with outline and fill
#[derive(Debug, Clone)]
pub struct EllipseObject {
    pub common: ObjectCommon,
    pub line_width: Distance,
    pub line_color: ColorNode,
    pub fill_color: ColorNode,
}

impl EllipseObject {
    pub fn new() -> Self {
        EllipseObject {
            common: ObjectCommon::new(),
            line_width: Distance::pt(1.0),
            line_color: ColorNode::default(),
            fill_color: ColorNode::default(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_geometry(
        x0: Distance,
        y0: Distance,
        w: Distance,
        h: Distance,
        lock_aspect_ratio: bool,
        line_width: Distance,
        line_color: ColorNode,
        fill_color: ColorNode,
        matrix: Matrix,
    ) -> Self {
        let mut object = EllipseObject::new();
        object.common.x0 = x0;
        object.common.y0 = y0;
        object.common.w = w;
        object.common.h = h;
        object.common.lock_aspect_ratio = lock_aspect_ratio;
        object.common.matrix = matrix;
        object.line_width = line_width;
        object.line_color = line_color;
        object.fill_color = fill_color;
        object
    }
}

impl Default for EllipseObject {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelObject for EllipseObject {
    fn common(&self) -> &ObjectCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ObjectCommon {
        &mut self.common
    }

    fn type_name(&self) -> &'static str {
        "Ellipse"
    }

    fn can_fill(&self) -> bool {
        true
    }

    fn can_line_color(&self) -> bool {
        true
    }

    fn can_line_width(&self) -> bool {
        true
    }
}
