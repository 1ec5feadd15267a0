//! Label stock description
//!
//! A template names the physical stock (brand/part) and carries the page
//! size plus one or more frames, the outline geometry of a single label
//! position. Frames come in rectangular, elliptical and round variants,
//! each with a waste margin used when rendering bleeds.

use crate::types::Distance;
use std::f64::consts::TAU;

/// A rectangular label frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRect {
    pub id: String,
    pub w: Distance,
    pub h: Distance,
    /// Corner radius
    pub round: Distance,
    pub x_waste: Distance,
    pub y_waste: Distance,
}

/// An elliptical label frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameEllipse {
    pub id: String,
    pub w: Distance,
    pub h: Distance,
    pub waste: Distance,
}

/// A circular label frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRound {
    pub id: String,
    pub radius: Distance,
    pub waste: Distance,
}

/// The physical outline of one label position on a sheet
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Rect(FrameRect),
    Ellipse(FrameEllipse),
    Round(FrameRound),
}

/// Segments used to approximate curved outlines.
const ARC_SEGMENTS: usize = 72;

impl Frame {
    pub fn rect(
        id: impl Into<String>,
        w: Distance,
        h: Distance,
        round: Distance,
        x_waste: Distance,
        y_waste: Distance,
    ) -> Self {
        Frame::Rect(FrameRect {
            id: id.into(),
            w,
            h,
            round,
            x_waste,
            y_waste,
        })
    }

    pub fn ellipse(id: impl Into<String>, w: Distance, h: Distance, waste: Distance) -> Self {
        Frame::Ellipse(FrameEllipse {
            id: id.into(),
            w,
            h,
            waste,
        })
    }

    pub fn round(id: impl Into<String>, radius: Distance, waste: Distance) -> Self {
        Frame::Round(FrameRound {
            id: id.into(),
            radius,
            waste,
        })
    }

    pub fn id(&self) -> &str {
        match self {
            Frame::Rect(f) => &f.id,
            Frame::Ellipse(f) => &f.id,
            Frame::Round(f) => &f.id,
        }
    }

    pub fn w(&self) -> Distance {
        match self {
            Frame::Rect(f) => f.w,
            Frame::Ellipse(f) => f.w,
            Frame::Round(f) => f.radius * 2.0,
        }
    }

    pub fn h(&self) -> Distance {
        match self {
            Frame::Rect(f) => f.h,
            Frame::Ellipse(f) => f.h,
            Frame::Round(f) => f.radius * 2.0,
        }
    }

    /// Same variant with the same geometry, within tolerance.
    pub fn is_similar_to(&self, other: &Frame) -> bool {
        match (self, other) {
            (Frame::Rect(a), Frame::Rect(b)) => a.w.approx_eq(b.w) && a.h.approx_eq(b.h),
            (Frame::Ellipse(a), Frame::Ellipse(b)) => a.w.approx_eq(b.w) && a.h.approx_eq(b.h),
            (Frame::Round(a), Frame::Round(b)) => a.radius.approx_eq(b.radius),
            _ => false,
        }
    }

    /// Closed outline polygon for preview rendering, in points.
    pub fn outline_path(&self) -> Vec<(f64, f64)> {
        match self {
            Frame::Rect(f) => {
                let (w, h) = (f.w.to_pt(), f.h.to_pt());
                vec![(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)]
            }
            Frame::Ellipse(f) => {
                let (rx, ry) = (f.w.to_pt() / 2.0, f.h.to_pt() / 2.0);
                (0..ARC_SEGMENTS)
                    .map(|i| {
                        let angle = TAU * i as f64 / ARC_SEGMENTS as f64;
                        (rx + rx * angle.cos(), ry + ry * angle.sin())
                    })
                    .collect()
            }
            Frame::Round(f) => {
                let r = f.radius.to_pt();
                (0..ARC_SEGMENTS)
                    .map(|i| {
                        let angle = TAU * i as f64 / ARC_SEGMENTS as f64;
                        (r + r * angle.cos(), r + r * angle.sin())
                    })
                    .collect()
            }
        }
    }
}

/// Describes the label stock a document targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub brand: String,
    pub part: String,
    pub description: String,
    pub paper_id: String,
    pub page_width: Distance,
    pub page_height: Distance,
    frames: Vec<Frame>,
}

impl Template {
    pub fn new(
        brand: impl Into<String>,
        part: impl Into<String>,
        description: impl Into<String>,
        paper_id: impl Into<String>,
        page_width: Distance,
        page_height: Distance,
    ) -> Self {
        Template {
            brand: brand.into(),
            part: part.into(),
            description: description.into(),
            paper_id: paper_id.into(),
            page_width,
            page_height,
            frames: Vec::new(),
        }
    }

    /// Stock name as shown in pickers: "brand part".
    pub fn name(&self) -> String {
        format!("{} {}", self.brand, self.part)
    }

    pub fn add_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The primary frame, when any.
    pub fn frame(&self) -> Option<&Frame> {
        self.frames.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dimensions() {
        let frame = Frame::rect(
            "rect1",
            Distance::pt(120.0),
            Distance::pt(220.0),
            Distance::pt(5.0),
            Distance::ZERO,
            Distance::ZERO,
        );
        assert_eq!(frame.w().to_pt(), 120.0);
        assert_eq!(frame.h().to_pt(), 220.0);
        assert_eq!(frame.id(), "rect1");

        let round = Frame::round("r0", Distance::pt(36.0), Distance::ZERO);
        assert_eq!(round.w().to_pt(), 72.0);
    }

    #[test]
    fn test_is_similar_to() {
        let a = Frame::ellipse("a", Distance::pt(100.0), Distance::pt(50.0), Distance::ZERO);
        let b = Frame::ellipse(
            "b",
            Distance::pt(100.0 + 1e-12),
            Distance::pt(50.0),
            Distance::pt(2.0),
        );
        assert!(a.is_similar_to(&b));

        let c = Frame::rect(
            "c",
            Distance::pt(100.0),
            Distance::pt(50.0),
            Distance::ZERO,
            Distance::ZERO,
            Distance::ZERO,
        );
        assert!(!a.is_similar_to(&c));
    }

    #[test]
    fn test_template_frames() {
        let mut template = Template::new(
            "Test Brand",
            "part",
            "desc",
            "letter",
            Distance::pt(612.0),
            Distance::pt(792.0),
        );
        assert!(template.frame().is_none());
        template.add_frame(Frame::rect(
            "0",
            Distance::pt(120.0),
            Distance::pt(220.0),
            Distance::ZERO,
            Distance::ZERO,
            Distance::ZERO,
        ));
        assert_eq!(template.frame().unwrap().id(), "0");
        assert_eq!(template.name(), "Test Brand part");
    }

    #[test]
    fn test_outline_paths_close() {
        let frame = Frame::ellipse("e", Distance::pt(100.0), Distance::pt(50.0), Distance::ZERO);
        let path = frame.outline_path();
        assert_eq!(path.len(), 72);
        // All points inside the bounding box
        assert!(path
            .iter()
            .all(|(x, y)| (-1e-9..=100.0 + 1e-9).contains(x) && (-1e-9..=50.0 + 1e-9).contains(y)));
    }
}
