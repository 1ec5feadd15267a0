//! Round-trip object comparison helpers.

#![allow(dead_code)]

use labelrust::model::{ImageObject, ObjectCommon, ObjectType};
use std::path::Path;

fn assert_common_roundtrip(original: &ObjectCommon, parsed: &ObjectCommon) {
    // Identifiers are generated, never preserved
    assert_ne!(original.id, parsed.id);

    assert_eq!(original.x0.to_pt(), parsed.x0.to_pt());
    assert_eq!(original.y0.to_pt(), parsed.y0.to_pt());
    assert!(original.w.approx_eq(parsed.w), "w mismatch");
    assert!(original.h.approx_eq(parsed.h), "h mismatch");
    assert_eq!(original.lock_aspect_ratio, parsed.lock_aspect_ratio);
    assert_eq!(original.matrix, parsed.matrix);
    assert_eq!(original.shadow, parsed.shadow);
    assert_eq!(original.shadow_x.to_pt(), parsed.shadow_x.to_pt());
    assert_eq!(original.shadow_y.to_pt(), parsed.shadow_y.to_pt());
    assert_eq!(original.shadow_opacity, parsed.shadow_opacity);
    assert_eq!(original.shadow_color, parsed.shadow_color);
}

fn assert_image_roundtrip(original: &ImageObject, parsed: &ImageObject, dir: &Path) {
    assert_eq!(original.filename.is_field(), parsed.filename.is_field());
    assert_eq!(
        original.filename.data().is_empty(),
        parsed.filename.data().is_empty()
    );

    if original.filename.data().is_empty()
        || original.filename.is_field()
        || !original.has_payload()
    {
        // Nothing to resolve: the file name survives untouched
        assert_eq!(original.filename, parsed.filename);
    } else {
        // Resolved against the document directory
        assert_ne!(original.filename, parsed.filename);
        assert_eq!(
            dir.join(original.filename.data()).display().to_string(),
            parsed.filename.data()
        );
    }

    assert_eq!(original.payload, parsed.payload);
}

/// Assert that `parsed` reproduces `original` in every attribute except the
/// object identifier, with image file names resolved against `dir`.
pub fn assert_object_roundtrip(original: &ObjectType, parsed: &ObjectType, dir: &Path) {
    assert_common_roundtrip(original.common(), parsed.common());

    assert_eq!(original.can_text(), parsed.can_text());
    assert_eq!(original.can_fill(), parsed.can_fill());
    assert_eq!(original.can_line_color(), parsed.can_line_color());
    assert_eq!(original.can_line_width(), parsed.can_line_width());

    match (original, parsed) {
        (ObjectType::Box(a), ObjectType::Box(b)) => {
            assert_eq!(a.line_width.to_pt(), b.line_width.to_pt());
            assert_eq!(a.line_color, b.line_color);
            assert_eq!(a.fill_color, b.fill_color);
        }
        (ObjectType::Ellipse(a), ObjectType::Ellipse(b)) => {
            assert_eq!(a.line_width.to_pt(), b.line_width.to_pt());
            assert_eq!(a.line_color, b.line_color);
            assert_eq!(a.fill_color, b.fill_color);
        }
        (ObjectType::Line(a), ObjectType::Line(b)) => {
            assert_eq!(a.line_width.to_pt(), b.line_width.to_pt());
            assert_eq!(a.line_color, b.line_color);
        }
        (ObjectType::Image(a), ObjectType::Image(b)) => {
            assert_image_roundtrip(a, b, dir);
        }
        (ObjectType::Text(a), ObjectType::Text(b)) => {
            assert_eq!(a.text, b.text);
            assert_eq!(a.font_family, b.font_family);
            assert_eq!(a.font_size, b.font_size);
            assert_eq!(a.font_weight, b.font_weight);
            assert_eq!(a.font_italic, b.font_italic);
            assert_eq!(a.font_underline, b.font_underline);
            assert_eq!(a.text_color, b.text_color);
            assert_eq!(a.h_align, b.h_align);
            assert_eq!(a.v_align, b.v_align);
            assert_eq!(a.wrap_mode, b.wrap_mode);
            assert_eq!(a.line_spacing, b.line_spacing);
            assert_eq!(a.auto_shrink, b.auto_shrink);
        }
        (ObjectType::Barcode(a), ObjectType::Barcode(b)) => {
            assert_eq!(a.style_id, b.style_id);
            assert_eq!(a.text_flag, b.text_flag);
            assert_eq!(a.checksum_flag, b.checksum_flag);
            assert_eq!(a.bc_data, b.bc_data);
            assert_eq!(a.bc_color, b.bc_color);
            assert_eq!(a.format_digits, b.format_digits);
        }
        (a, b) => panic!(
            "variant mismatch after round trip: {} vs {}",
            a.type_name(),
            b.type_name()
        ),
    }
}
