//! Core value types shared across the document model

pub mod color;
pub mod distance;
pub mod id;
pub mod matrix;

pub use color::{Color, ColorNode};
pub use distance::{Distance, Units};
pub use id::ObjectId;
pub use matrix::Matrix;
