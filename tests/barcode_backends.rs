//! Barcode backend integration tests.

use labelrust::barcode::{self, Primitive};

#[test]
fn registry_only_advertises_compiled_in_backends() {
    let styles = barcode::styles();
    assert!(!styles.is_empty());
    for style in &styles {
        assert!(barcode::create(&style.id).is_some());
    }
    assert!(barcode::create("qr").is_none());
}

#[test]
fn numeric_length_boundaries_postnet_exact() {
    // postnet-9 accepts exactly nine digits
    let symbology = barcode::create("postnet-9").unwrap();
    assert!(!symbology.validate("12345678")); // min - 1
    assert!(symbology.validate("123456789")); // min == max
    assert!(!symbology.validate("1234567890")); // max + 1
}

#[test]
fn numeric_length_boundaries_postnet_range() {
    // plain postnet accepts 5, 9 or 11 digits
    let symbology = barcode::create("postnet").unwrap();
    assert!(!symbology.validate("1234")); // min - 1
    assert!(symbology.validate("12345")); // min
    assert!(symbology.validate("12345678901")); // max
    assert!(!symbology.validate("123456789012")); // max + 1
    assert!(!symbology.validate("1234a"));
}

#[test]
fn upca_length_boundaries() {
    let symbology = barcode::create("upc-a").unwrap();
    assert!(!symbology.validate("0360002914")); // min - 1
    assert!(symbology.validate("03600029145")); // min
    assert!(symbology.validate("036000291452")); // max, valid check digit
    assert!(!symbology.validate("0360002914521")); // max + 1
}

#[test]
fn validate_is_pure_and_blocks_encoding() {
    // Invalid input yields no geometry instead of a crash
    assert!(barcode::build("ean-13", "not numbers", true, true, 100.0, 40.0).is_none());
    assert!(barcode::build("code39", "lower ok", true, true, 100.0, 40.0).is_some());
}

#[test]
fn vector_output_has_geometry() {
    let vector = barcode::build("code39", "1234", true, true, 120.0, 50.0).unwrap();
    assert!(vector.width > 119.0);
    assert_eq!(vector.height, 50.0);
    assert!(vector
        .primitives
        .iter()
        .any(|p| matches!(p, Primitive::Box { .. })));
    assert!(vector
        .primitives
        .iter()
        .any(|p| matches!(p, Primitive::Text { .. })));
}

#[test]
fn postnet_geometry_is_fixed_size() {
    let a = barcode::build("postnet-5", "12345", true, false, 10.0, 10.0).unwrap();
    let b = barcode::build("postnet-5", "12345", true, false, 500.0, 500.0).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.height, 9.0);
}

#[test]
fn text_flag_controls_text_primitive() {
    let with_text = barcode::build("code39", "1234", true, true, 100.0, 50.0).unwrap();
    let without = barcode::build("code39", "1234", true, false, 100.0, 50.0).unwrap();
    assert!(with_text
        .primitives
        .iter()
        .any(|p| matches!(p, Primitive::Text { .. })));
    assert!(!without
        .primitives
        .iter()
        .any(|p| matches!(p, Primitive::Text { .. })));
}

#[test]
fn checksum_flag_changes_code39_length() {
    let with_checksum = barcode::build("code39", "1234", true, false, 1.0, 50.0).unwrap();
    let without = barcode::build("code39", "1234", false, false, 1.0, 50.0).unwrap();
    assert!(with_checksum.width > without.width);
}

#[test]
fn default_style_is_registered() {
    let style = barcode::default_style();
    assert!(barcode::create(&style.id).is_some());
    assert!(style.can_text);
}
