//! Document reading and writing

pub mod xml;

pub use xml::{XmlLabelCreator, XmlLabelParser};
