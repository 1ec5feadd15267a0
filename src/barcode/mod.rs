//! Barcode backends
//!
//! Maps a style id to a concrete encoder capable of validating raw input,
//! producing encoded module patterns, and emitting vector geometry for
//! rendering and print. The registry only advertises symbologies compiled
//! into this build.

pub mod base;
pub mod code39;
pub mod postnet;
pub mod style;
pub mod upcean;

pub use base::{Primitive, Symbology, Vectorized};
pub use style::Style;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use std::sync::RwLock;

/// Style id of the default symbology.
pub const DEFAULT_STYLE_ID: &str = "code39";

type Factory = fn() -> Box<dyn Symbology>;

struct Entry {
    style: Style,
    factory: Factory,
}

fn make_code39() -> Box<dyn Symbology> {
    Box::new(code39::Code39)
}

fn make_upca() -> Box<dyn Symbology> {
    Box::new(upcean::UpcA)
}

fn make_ean13() -> Box<dyn Symbology> {
    Box::new(upcean::Ean13)
}

fn make_postnet() -> Box<dyn Symbology> {
    Box::new(postnet::Postnet::any())
}

fn make_postnet_5() -> Box<dyn Symbology> {
    Box::new(postnet::Postnet::exact(5))
}

fn make_postnet_9() -> Box<dyn Symbology> {
    Box::new(postnet::Postnet::exact(9))
}

fn make_postnet_11() -> Box<dyn Symbology> {
    Box::new(postnet::Postnet::exact(11))
}

static REGISTRY: Lazy<RwLock<AHashMap<String, Entry>>> = Lazy::new(|| {
    let mut map = AHashMap::new();
    let mut add = |style: Style, factory: Factory| {
        map.insert(style.id.clone(), Entry { style, factory });
    };

    add(
        Style::new("code39", "Code 39", true, true, true, true, 10),
        make_code39,
    );
    add(
        Style::new("upc-a", "UPC-A", true, false, true, false, 11),
        make_upca,
    );
    add(
        Style::new("ean-13", "EAN-13", true, false, true, false, 12),
        make_ean13,
    );
    add(
        Style::new("postnet", "POSTNET (any)", false, false, true, false, 11),
        make_postnet,
    );
    add(
        Style::new("postnet-5", "POSTNET-5 (ZIP only)", false, false, true, false, 5),
        make_postnet_5,
    );
    add(
        Style::new("postnet-9", "POSTNET-9 (ZIP+4)", false, false, true, false, 9),
        make_postnet_9,
    );
    add(
        Style::new("postnet-11", "POSTNET-11 (DPBC)", false, false, true, false, 11),
        make_postnet_11,
    );

    RwLock::new(map)
});

/// Register a symbology backend. Intended to run at process start;
/// replacing an existing style id is allowed.
pub fn register(style: Style, factory: Factory) {
    REGISTRY
        .write()
        .expect("barcode registry poisoned")
        .insert(style.id.clone(), Entry { style, factory });
}

/// Styles of every compiled-in symbology, sorted by id.
pub fn styles() -> Vec<Style> {
    let mut styles: Vec<Style> = REGISTRY
        .read()
        .expect("barcode registry poisoned")
        .values()
        .map(|entry| entry.style.clone())
        .collect();
    styles.sort_by(|a, b| a.id.cmp(&b.id));
    styles
}

/// Look up a style by id.
pub fn style(id: &str) -> Option<Style> {
    REGISTRY
        .read()
        .expect("barcode registry poisoned")
        .get(id)
        .map(|entry| entry.style.clone())
}

/// The default style.
pub fn default_style() -> Style {
    style(DEFAULT_STYLE_ID).expect("default symbology is always compiled in")
}

/// Create the encoder registered under `id`. Unknown ids yield `None`.
pub fn create(id: &str) -> Option<Box<dyn Symbology>> {
    REGISTRY
        .read()
        .expect("barcode registry poisoned")
        .get(id)
        .map(|entry| (entry.factory)())
}

/// Validate and build barcode geometry targeting `w` x `h`.
///
/// Returns `None` for unknown styles or data the symbology rejects; the
/// caller renders a placeholder in that case.
pub fn build(
    style_id: &str,
    data: &str,
    checksum_flag: bool,
    text_flag: bool,
    w: f64,
    h: f64,
) -> Option<Vectorized> {
    let symbology = create(style_id)?;
    if !symbology.validate(data) {
        return None;
    }
    let cooked = symbology.preprocess(data);
    let encoded = symbology.encode(&cooked, checksum_flag);
    let text = symbology.display_text(&cooked, checksum_flag);
    Some(symbology.vectorize(&encoded, &text, text_flag, w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_compiled_in_styles() {
        let styles = styles();
        assert!(styles.iter().any(|s| s.id == "code39"));
        assert!(styles.iter().any(|s| s.id == "postnet-11"));
        // sorted by id
        let mut sorted = styles.clone();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(styles, sorted);
    }

    #[test]
    fn test_default_style() {
        assert_eq!(default_style().id, DEFAULT_STYLE_ID);
    }

    #[test]
    fn test_unknown_style() {
        assert!(style("code-999").is_none());
        assert!(create("code-999").is_none());
        assert!(build("code-999", "1234", true, true, 100.0, 50.0).is_none());
    }

    #[test]
    fn test_build_valid_and_invalid() {
        assert!(build("code39", "1234", true, true, 100.0, 50.0).is_some());
        assert!(build("code39", "", true, true, 100.0, 50.0).is_none());
        assert!(build("upc-a", "03600029145", true, true, 100.0, 50.0).is_some());
        assert!(build("upc-a", "123", true, true, 100.0, 50.0).is_none());
    }

    #[test]
    fn test_build_is_pure() {
        let a = build("ean-13", "400638133393", true, true, 120.0, 60.0);
        let b = build("ean-13", "400638133393", true, true, 120.0, 60.0);
        assert_eq!(a, b);
    }
}
