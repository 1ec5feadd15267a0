//! Line object

use super::object::{LabelObject, ObjectCommon};
use crate::types::{ColorNode, Distance, Matrix};

/// A line from the object origin to its (w, h) corner
#[derive(Debug, Clone)]
pub struct LineObject {
    pub common: ObjectCommon,
    pub line_width: Distance,
    pub line_color: ColorNode,
}

impl LineObject {
    pub fn new() -> Self {
        LineObject {
            common: ObjectCommon::new(),
            line_width: Distance::pt(1.0),
            line_color: ColorNode::default(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_geometry(
        x0: Distance,
        y0: Distance,
        dx: Distance,
        dy: Distance,
        line_width: Distance,
        line_color: ColorNode,
        matrix: Matrix,
    ) -> Self {
        let mut object = LineObject::new();
        object.common.x0 = x0;
        object.common.y0 = y0;
        object.common.w = dx;
        object.common.h = dy;
        object.common.matrix = matrix;
        object.line_width = line_width;
        object.line_color = line_color;
        object
    }
}

impl Default for LineObject {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelObject for LineObject {
    fn common(&self) -> &ObjectCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ObjectCommon {
        &mut self.common
    }

    fn type_name(&self) -> &'static str {
        "Line"
    }

    fn can_line_color(&self) -> bool {
        true
    }

    fn can_line_width(&self) -> bool {
        true
    }
}
