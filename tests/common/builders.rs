//! Test document builders.
//!
//! `create_all_objects()` produces one instance of every object variant
//! (ten objects total), exercising locked/unlocked aspect, transforms,
//! shadows, field bindings, and the three image payload situations
//! (embedded raster, embedded SVG, missing external file).

#![allow(dead_code)]

use labelrust::model::{
    BarcodeObject, BoxObject, EllipseObject, FontWeight, HAlign, ImageObject, LineObject,
    ObjectCommon, ObjectType, TextNode, TextObject, VAlign, WrapMode,
};
use labelrust::template::{Frame, Template};
use labelrust::types::{Color, ColorNode, Distance, Matrix};

/// A real 1x1 PNG, base64-decoded at build time.
pub const PIXEL_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

pub fn pixel_png() -> Vec<u8> {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD
        .decode(PIXEL_PNG_BASE64)
        .unwrap()
}

pub fn red_square_svg() -> Vec<u8> {
    br#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8"><rect width="8" height="8" fill="red"/></svg>"#
        .to_vec()
}

fn set_shadow(
    common: &mut ObjectCommon,
    enabled: bool,
    x: f64,
    y: f64,
    opacity: f64,
    color: Color,
) {
    common.shadow = enabled;
    common.shadow_x = Distance::pt(x);
    common.shadow_y = Distance::pt(y);
    common.shadow_opacity = opacity;
    common.shadow_color = ColorNode::from_color(color);
}

/// Ten objects covering every variant. Object `i` sits at (i, i+1) with
/// aspect lock on for even indices.
pub fn create_all_objects() -> Vec<ObjectType> {
    let t_matrix = Matrix::translation(50.0, 50.0);
    let s_matrix = Matrix::scaling(0.5, 1.0);
    let mut objects = Vec::new();

    // 0: box
    let mut object = BoxObject::with_geometry(
        Distance::pt(0.0),
        Distance::pt(1.0),
        Distance::pt(10.0),
        Distance::pt(20.0),
        true,
        Distance::pt(2.0),
        ColorNode::from_color(Color::RED),
        ColorNode::from_color(Color::GREEN),
        t_matrix,
    );
    set_shadow(&mut object.common, true, 1.0, 2.0, 0.7, Color::BLACK);
    objects.push(ObjectType::Box(object));

    // 1: ellipse
    let mut object = EllipseObject::with_geometry(
        Distance::pt(1.0),
        Distance::pt(2.0),
        Distance::pt(30.0),
        Distance::pt(40.0),
        false,
        Distance::pt(3.0),
        ColorNode::from_color(Color::BLACK),
        ColorNode::from_color(Color::WHITE),
        s_matrix,
    );
    set_shadow(&mut object.common, true, 2.0, 3.0, 0.8, Color::BLUE);
    objects.push(ObjectType::Ellipse(object));

    // 2: image with no name and no payload
    let mut object = ImageObject::with_geometry(
        Distance::pt(2.0),
        Distance::pt(3.0),
        Distance::pt(50.0),
        Distance::pt(50.0),
        true,
        TextNode::literal(""),
        t_matrix,
    );
    set_shadow(&mut object.common, false, 3.0, 4.0, 0.9, Color::WHITE);
    objects.push(ObjectType::Image(object));

    // 3: image with embedded raster payload
    let mut object = ImageObject::from_raster("image2.png", "PNG", pixel_png());
    object.common.x0 = Distance::pt(3.0);
    object.common.y0 = Distance::pt(4.0);
    object.common.w = Distance::pt(60.0);
    object.common.h = Distance::pt(70.0);
    object.common.lock_aspect_ratio = false;
    object.common.matrix = s_matrix;
    set_shadow(&mut object.common, true, 6.0, 4.0, 0.9, Color::BLACK);
    objects.push(ObjectType::Image(object));

    // 4: image with embedded SVG payload
    let mut object = ImageObject::from_svg("image3.svg", red_square_svg());
    object.common.x0 = Distance::pt(4.0);
    object.common.y0 = Distance::pt(5.0);
    object.common.w = Distance::pt(70.0);
    object.common.h = Distance::pt(80.0);
    object.common.lock_aspect_ratio = true;
    objects.push(ObjectType::Image(object));

    // 5: image bound to a merge field
    let mut object = ImageObject::with_geometry(
        Distance::pt(5.0),
        Distance::pt(6.0),
        Distance::pt(80.0),
        Distance::pt(90.0),
        false,
        TextNode::field("key"),
        t_matrix,
    );
    object.common.shadow = true;
    objects.push(ObjectType::Image(object));

    // 6: image naming a file that is neither embedded nor on disk
    let object = ImageObject::with_geometry(
        Distance::pt(6.0),
        Distance::pt(7.0),
        Distance::pt(90.0),
        Distance::pt(100.0),
        true,
        TextNode::literal("image5.jpg"),
        Matrix::IDENTITY,
    );
    objects.push(ObjectType::Image(object));

    // 7: line
    let mut object = LineObject::with_geometry(
        Distance::pt(7.0),
        Distance::pt(8.0),
        Distance::pt(100.0),
        Distance::pt(110.0),
        Distance::pt(4.0),
        ColorNode::from_color(Color::GREEN),
        s_matrix,
    );
    set_shadow(&mut object.common, true, 5.0, 5.0, 0.5, Color::RED);
    objects.push(ObjectType::Line(object));

    // 8: text
    let mut object = TextObject::with_geometry(
        Distance::pt(8.0),
        Distance::pt(9.0),
        Distance::pt(110.0),
        Distance::pt(120.0),
        true,
        "text",
        s_matrix,
    );
    object.font_family = "Serif".to_string();
    object.font_size = 12.0;
    object.font_weight = FontWeight::Bold;
    object.font_italic = true;
    object.font_underline = true;
    object.text_color = ColorNode::from_color(Color::RED);
    object.h_align = HAlign::Center;
    object.v_align = VAlign::Bottom;
    object.wrap_mode = WrapMode::None;
    object.line_spacing = 1.3;
    object.auto_shrink = false;
    set_shadow(&mut object.common, true, 5.0, 5.0, 0.5, Color::RED);
    objects.push(ObjectType::Text(object));

    // 9: barcode
    let object = BarcodeObject::with_geometry(
        Distance::pt(9.0),
        Distance::pt(10.0),
        Distance::pt(50.0),
        Distance::pt(50.0),
        false,
        "code39",
        true,
        true,
        TextNode::literal("1234"),
        ColorNode::from_color(Color::BLACK),
        Matrix::translation(50.0, 50.0),
    );
    objects.push(ObjectType::Barcode(object));

    objects
}

/// The template used by whole-document tests.
pub fn create_template() -> Template {
    let mut template = Template::new(
        "Test Brand",
        "part",
        "desc",
        "testPaperId",
        Distance::pt(110.0),
        Distance::pt(410.0),
    );
    template.add_frame(Frame::rect(
        "rect1",
        Distance::pt(120.0),
        Distance::pt(220.0),
        Distance::pt(5.0),
        Distance::ZERO,
        Distance::ZERO,
    ));
    template
}
