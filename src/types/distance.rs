//! Length type for label geometry
//!
//! All geometry is stored internally in points (1/72 inch). Unit
//! conversions are applied only at construction and display time, so
//! round trips through the document format never accumulate conversion
//! error beyond floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

const PTS_PER_INCH: f64 = 72.0;
const PTS_PER_MM: f64 = 72.0 / 25.4;
const PTS_PER_CM: f64 = 72.0 / 2.54;
const PTS_PER_PICA: f64 = 12.0;

/// Tolerance used for geometry comparison after unit conversion.
const EPSILON: f64 = 1e-9;

/// Display/storage units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Points (1/72 inch)
    #[default]
    Pt,
    /// Inches
    In,
    /// Millimeters
    Mm,
    /// Centimeters
    Cm,
    /// Picas (12 points)
    Pc,
}

impl Units {
    /// Conversion factor from this unit to points.
    pub fn pts_per_unit(&self) -> f64 {
        match self {
            Units::Pt => 1.0,
            Units::In => PTS_PER_INCH,
            Units::Mm => PTS_PER_MM,
            Units::Cm => PTS_PER_CM,
            Units::Pc => PTS_PER_PICA,
        }
    }

    /// Unit name as used in documents and the settings store.
    pub fn name(&self) -> &'static str {
        match self {
            Units::Pt => "pt",
            Units::In => "in",
            Units::Mm => "mm",
            Units::Cm => "cm",
            Units::Pc => "pc",
        }
    }

    /// Parse a unit name; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Units> {
        match name {
            "pt" => Some(Units::Pt),
            "in" => Some(Units::In),
            "mm" => Some(Units::Mm),
            "cm" => Some(Units::Cm),
            "pc" => Some(Units::Pc),
            _ => None,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A physical length, stored in points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Distance(f64);

impl Distance {
    /// Zero length
    pub const ZERO: Distance = Distance(0.0);

    /// Create from points
    #[inline]
    pub const fn pt(value: f64) -> Self {
        Distance(value)
    }

    /// Create from inches
    #[inline]
    pub fn inches(value: f64) -> Self {
        Distance(value * PTS_PER_INCH)
    }

    /// Create from millimeters
    #[inline]
    pub fn mm(value: f64) -> Self {
        Distance(value * PTS_PER_MM)
    }

    /// Create from centimeters
    #[inline]
    pub fn cm(value: f64) -> Self {
        Distance(value * PTS_PER_CM)
    }

    /// Create from a value in the given units
    pub fn in_units(value: f64, units: Units) -> Self {
        Distance(value * units.pts_per_unit())
    }

    /// Value in points
    #[inline]
    pub const fn to_pt(&self) -> f64 {
        self.0
    }

    /// Value in inches
    #[inline]
    pub fn to_inches(&self) -> f64 {
        self.0 / PTS_PER_INCH
    }

    /// Value in millimeters
    #[inline]
    pub fn to_mm(&self) -> f64 {
        self.0 / PTS_PER_MM
    }

    /// Value in the given units
    pub fn to_units(&self, units: Units) -> f64 {
        self.0 / units.pts_per_unit()
    }

    /// Tolerance-based equality, for geometry read back from a document.
    pub fn approx_eq(&self, other: Distance) -> bool {
        let scale = 1.0_f64.max(self.0.abs()).max(other.0.abs());
        (self.0 - other.0).abs() <= EPSILON * scale
    }

    /// Absolute value
    pub fn abs(&self) -> Distance {
        Distance(self.0.abs())
    }

    /// Larger of two lengths
    pub fn max(self, other: Distance) -> Distance {
        if self.0 >= other.0 {
            self
        } else {
            other
        }
    }

    /// Smaller of two lengths
    pub fn min(self, other: Distance) -> Distance {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }
}

impl Add for Distance {
    type Output = Distance;
    fn add(self, rhs: Distance) -> Distance {
        Distance(self.0 + rhs.0)
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Distance) {
        self.0 += rhs.0;
    }
}

impl Sub for Distance {
    type Output = Distance;
    fn sub(self, rhs: Distance) -> Distance {
        Distance(self.0 - rhs.0)
    }
}

impl SubAssign for Distance {
    fn sub_assign(&mut self, rhs: Distance) {
        self.0 -= rhs.0;
    }
}

impl Mul<f64> for Distance {
    type Output = Distance;
    fn mul(self, rhs: f64) -> Distance {
        Distance(self.0 * rhs)
    }
}

impl Div<f64> for Distance {
    type Output = Distance;
    fn div(self, rhs: f64) -> Distance {
        Distance(self.0 / rhs)
    }
}

impl Neg for Distance {
    type Output = Distance;
    fn neg(self) -> Distance {
        Distance(-self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}
