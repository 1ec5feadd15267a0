//! # labelrust
//!
//! A pure Rust library for reading and writing label/card design documents.
//!
//! The crate implements the document engine of a label designer: a
//! polymorphic object model (boxes, ellipses, lines, images, text,
//! barcodes) over template-defined label stock, an XML save/load format
//! with a lossless round-trip contract, pluggable merge-source backends
//! that bind object fields to rows of external data (CSV/TSV and
//! friends), and pluggable barcode backends with validation and vector
//! output.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use labelrust::{Model, io::{XmlLabelCreator, XmlLabelParser}};
//!
//! // Read a label document
//! let model = XmlLabelParser::read_file("sample.labels")?;
//!
//! // Inspect objects (z-order, back to front)
//! for object in model.objects() {
//!     println!("{}: {}", object.type_name(), object.id());
//! }
//!
//! // Write it back
//! let mut model = model;
//! XmlLabelCreator::write_file(&mut model, "output.labels")?;
//! # Ok::<(), labelrust::error::LabelError>(())
//! ```
//!
//! ## Architecture
//!
//! - `Model` — one open document: template, objects, variables, merge
//! - `ObjectType` — closed tagged-variant object set behind `LabelObject`
//! - `io::xml` — deterministic XML codec (byte-stable re-serialization)
//! - `merge` — merge-source registry keyed by backend id strings
//! - `barcode` — symbology registry with pure validate/encode/vectorize
//!
//! ## Round-trip contract
//!
//! Parsing a serialized document reproduces every attribute except object
//! identifiers, which are regenerated on every parse; serializing the
//! parsed document again is byte-identical to the first serialization.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod barcode;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod merge;
pub mod model;
pub mod settings;
pub mod template;
pub mod types;

// Re-export commonly used types
pub use error::{LabelError, Result};
pub use types::{Color, ColorNode, Distance, Matrix, ObjectId, Units};

// Re-export the document model
pub use model::{
    BarcodeObject, BoxObject, EllipseObject, ImageObject, LabelObject, LineObject, Model,
    ModelEvent, ObjectType, TextNode, TextObject, Variable, Variables,
};

// Re-export templates
pub use template::{Frame, Template};

// Re-export I/O types
pub use io::{XmlLabelCreator, XmlLabelParser};

// Re-export merge essentials
pub use merge::{Merge, Record};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
