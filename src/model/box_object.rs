//! Box object

use super::object::{LabelObject, ObjectCommon};
use crate::types::{ColorNode, Distance, Matrix};

/// A rectangular box with outline and fill
#[derive(Debug, Clone)]
pub struct BoxObject {
    pub common: ObjectCommon,
    pub line_width: Distance,
    pub line_color: ColorNode,
    pub fill_color: ColorNode,
}

impl BoxObject {
    pub fn new() -> Self {
        BoxObject {
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
        let mut object = BoxObject::new();
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

impl Default for BoxObject {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelObject for BoxObject {
    fn common(&self) -> &ObjectCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ObjectCommon {
        &mut self.common
    }

    fn type_name(&self) -> &'static str {
        "Box"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_box_creation() {
        let object = BoxObject::with_geometry(
            Distance::pt(0.0),
            Distance::pt(1.0),
            Distance::pt(10.0),
            Distance::pt(20.0),
            true,
            Distance::pt(2.0),
            ColorNode::from_color(Color::RED),
            ColorNode::from_color(Color::GREEN),
            Matrix::translation(50.0, 50.0),
        );
        assert_eq!(object.common.w.to_pt(), 10.0);
        assert_eq!(object.line_color.color(), Color::RED);
        assert_eq!(object.type_name(), "Box");
    }
}
