//! Document serialization

use super::{format_bool, format_f64, DOCUMENT_ROOT, FORMAT_VERSION, OBJECTS_ROOT};
use crate::error::Result;
use crate::merge::Merge;
use crate::model::{
    BarcodeObject, BoxObject, EllipseObject, ImageObject, LineObject, Model, ObjectCommon,
    ObjectType, TextObject, Variables,
};
use crate::template::{Frame, Template};
use crate::types::ColorNode;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use indexmap::IndexMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs;
use std::path::Path;

type XmlWriter = Writer<Vec<u8>>;

/// Serializes documents and object lists to XML.
///
/// Output is deterministic: fixed element and attribute order, fixed
/// indentation, shortest-round-trip float formatting. Serializing a
/// freshly parsed document reproduces the source buffer byte for byte.
pub struct XmlLabelCreator;

impl XmlLabelCreator {
    /// Serialize a complete document to a buffer.
    pub fn serialize(model: &Model) -> Result<Vec<u8>> {
        let dir = model.dir();
        let mut writer = new_writer();

        let mut root = BytesStart::new(DOCUMENT_ROOT);
        root.push_attribute(("version", FORMAT_VERSION));
        writer.write_event(Event::Start(root))?;

        if let Some(template) = model.template() {
            write_template(&mut writer, template)?;
        }
        write_objects(&mut writer, model.objects(), Some(model.rotate()), &dir)?;
        write_merge(&mut writer, model.merge())?;
        if !model.variables().is_empty() {
            write_variables(&mut writer, model.variables())?;
        }
        write_data(&mut writer, model.objects(), &dir)?;

        writer.write_event(Event::End(BytesEnd::new(DOCUMENT_ROOT)))?;
        Ok(writer.into_inner())
    }

    /// Write a complete document to `path`. The model's file path is
    /// updated first so embedded file names are stored relative to it.
    pub fn write_file(model: &mut Model, path: impl AsRef<Path>) -> Result<()> {
        model.set_file_path(path.as_ref());
        let buffer = Self::serialize(model)?;
        fs::write(path.as_ref(), buffer)?;
        model.clear_modified();
        Ok(())
    }

    /// Serialize a bare object list (clipboard flavor). Embedded image data
    /// travels with the objects; paths resolve against the model directory.
    pub fn serialize_objects(objects: &[ObjectType], model: &Model) -> Result<Vec<u8>> {
        let dir = model.dir();
        let mut writer = new_writer();

        let mut root = BytesStart::new(OBJECTS_ROOT);
        root.push_attribute(("version", FORMAT_VERSION));
        writer.write_event(Event::Start(root))?;

        write_objects(&mut writer, objects, None, &dir)?;
        write_data(&mut writer, objects, &dir)?;

        writer.write_event(Event::End(BytesEnd::new(OBJECTS_ROOT)))?;
        Ok(writer.into_inner())
    }
}

fn new_writer() -> XmlWriter {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    // The declaration write cannot fail on a Vec sink
    let _ = writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)));
    writer
}

fn write_template(writer: &mut XmlWriter, template: &Template) -> Result<()> {
    let page_width = format_f64(template.page_width.to_pt());
    let page_height = format_f64(template.page_height.to_pt());

    let mut elem = BytesStart::new("Template");
    elem.push_attribute(("brand", template.brand.as_str()));
    elem.push_attribute(("part", template.part.as_str()));
    elem.push_attribute(("description", template.description.as_str()));
    elem.push_attribute(("paper-id", template.paper_id.as_str()));
    elem.push_attribute(("page-width", page_width.as_str()));
    elem.push_attribute(("page-height", page_height.as_str()));
    writer.write_event(Event::Start(elem))?;

    for frame in template.frames() {
        match frame {
            Frame::Rect(f) => {
                let mut elem = BytesStart::new("Frame-rect");
                elem.push_attribute(("id", f.id.as_str()));
                elem.push_attribute(("width", format_f64(f.w.to_pt()).as_str()));
                elem.push_attribute(("height", format_f64(f.h.to_pt()).as_str()));
                elem.push_attribute(("round", format_f64(f.round.to_pt()).as_str()));
                elem.push_attribute(("x-waste", format_f64(f.x_waste.to_pt()).as_str()));
                elem.push_attribute(("y-waste", format_f64(f.y_waste.to_pt()).as_str()));
                writer.write_event(Event::Empty(elem))?;
            }
            Frame::Ellipse(f) => {
                let mut elem = BytesStart::new("Frame-ellipse");
                elem.push_attribute(("id", f.id.as_str()));
                elem.push_attribute(("width", format_f64(f.w.to_pt()).as_str()));
                elem.push_attribute(("height", format_f64(f.h.to_pt()).as_str()));
                elem.push_attribute(("waste", format_f64(f.waste.to_pt()).as_str()));
                writer.write_event(Event::Empty(elem))?;
            }
            Frame::Round(f) => {
                let mut elem = BytesStart::new("Frame-round");
                elem.push_attribute(("id", f.id.as_str()));
                elem.push_attribute(("radius", format_f64(f.radius.to_pt()).as_str()));
                elem.push_attribute(("waste", format_f64(f.waste.to_pt()).as_str()));
                writer.write_event(Event::Empty(elem))?;
            }
        }
    }

    writer.write_event(Event::End(BytesEnd::new("Template")))?;
    Ok(())
}

fn write_objects(
    writer: &mut XmlWriter,
    objects: &[ObjectType],
    rotate: Option<bool>,
    dir: &Path,
) -> Result<()> {
    let mut elem = BytesStart::new("Objects");
    if let Some(rotate) = rotate {
        elem.push_attribute(("rotate", format_bool(rotate)));
    }
    writer.write_event(Event::Start(elem))?;

    for object in objects {
        match object {
            ObjectType::Box(o) => write_box(writer, o)?,
            ObjectType::Ellipse(o) => write_ellipse(writer, o)?,
            ObjectType::Line(o) => write_line(writer, o)?,
            ObjectType::Image(o) => write_image(writer, o, dir)?,
            ObjectType::Text(o) => write_text(writer, o)?,
            ObjectType::Barcode(o) => write_barcode(writer, o)?,
        }
    }

    writer.write_event(Event::End(BytesEnd::new("Objects")))?;
    Ok(())
}

/// Common attributes, written first and in fixed order for every variant.
fn push_common(elem: &mut BytesStart<'_>, common: &ObjectCommon) {
    elem.push_attribute(("x", format_f64(common.x0.to_pt()).as_str()));
    elem.push_attribute(("y", format_f64(common.y0.to_pt()).as_str()));
    elem.push_attribute(("w", format_f64(common.w.to_pt()).as_str()));
    elem.push_attribute(("h", format_f64(common.h.to_pt()).as_str()));
    elem.push_attribute(("lock-aspect-ratio", format_bool(common.lock_aspect_ratio)));
    let m = &common.matrix;
    let transform = format!(
        "{} {} {} {} {} {}",
        format_f64(m.a),
        format_f64(m.b),
        format_f64(m.c),
        format_f64(m.d),
        format_f64(m.dx),
        format_f64(m.dy)
    );
    elem.push_attribute(("transform", transform.as_str()));
    elem.push_attribute(("shadow", format_bool(common.shadow)));
    elem.push_attribute(("shadow-x", format_f64(common.shadow_x.to_pt()).as_str()));
    elem.push_attribute(("shadow-y", format_f64(common.shadow_y.to_pt()).as_str()));
    elem.push_attribute(("shadow-opacity", format_f64(common.shadow_opacity).as_str()));
    push_color(elem, "shadow-color", &common.shadow_color);
}

fn push_color(elem: &mut BytesStart<'_>, name: &str, node: &ColorNode) {
    if node.is_field() {
        elem.push_attribute((format!("{}-field", name).as_str(), node.key()));
    } else {
        elem.push_attribute((name, node.color().to_hex().as_str()));
    }
}

fn write_box(writer: &mut XmlWriter, object: &BoxObject) -> Result<()> {
    let mut elem = BytesStart::new("Object-box");
    push_common(&mut elem, &object.common);
    elem.push_attribute(("line-width", format_f64(object.line_width.to_pt()).as_str()));
    push_color(&mut elem, "line-color", &object.line_color);
    push_color(&mut elem, "fill-color", &object.fill_color);
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn write_ellipse(writer: &mut XmlWriter, object: &EllipseObject) -> Result<()> {
    let mut elem = BytesStart::new("Object-ellipse");
    push_common(&mut elem, &object.common);
    elem.push_attribute(("line-width", format_f64(object.line_width.to_pt()).as_str()));
    push_color(&mut elem, "line-color", &object.line_color);
    push_color(&mut elem, "fill-color", &object.fill_color);
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn write_line(writer: &mut XmlWriter, object: &LineObject) -> Result<()> {
    let mut elem = BytesStart::new("Object-line");
    push_common(&mut elem, &object.common);
    elem.push_attribute(("line-width", format_f64(object.line_width.to_pt()).as_str()));
    push_color(&mut elem, "line-color", &object.line_color);
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn write_image(writer: &mut XmlWriter, object: &ImageObject, dir: &Path) -> Result<()> {
    let mut elem = BytesStart::new("Object-image");
    push_common(&mut elem, &object.common);
    if object.filename.is_field() {
        elem.push_attribute(("src-field", object.filename.data()));
    } else {
        let src = relativize(object.filename.data(), dir);
        elem.push_attribute(("src", src.as_str()));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn write_text(writer: &mut XmlWriter, object: &TextObject) -> Result<()> {
    let mut elem = BytesStart::new("Object-text");
    push_common(&mut elem, &object.common);
    elem.push_attribute(("font-family", object.font_family.as_str()));
    elem.push_attribute(("font-size", format_f64(object.font_size).as_str()));
    elem.push_attribute(("font-weight", object.font_weight.name()));
    elem.push_attribute(("italic", format_bool(object.font_italic)));
    elem.push_attribute(("underline", format_bool(object.font_underline)));
    push_color(&mut elem, "color", &object.text_color);
    elem.push_attribute(("h-align", object.h_align.name()));
    elem.push_attribute(("v-align", object.v_align.name()));
    elem.push_attribute(("wrap-mode", object.wrap_mode.name()));
    elem.push_attribute(("line-spacing", format_f64(object.line_spacing).as_str()));
    elem.push_attribute(("auto-shrink", format_bool(object.auto_shrink)));
    writer.write_event(Event::Start(elem))?;

    for line in object.text.split('\n') {
        // Empty lines are self-closing so writer indentation never lands
        // inside a leaf; whitespace inside a non-empty line is content.
        if line.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new("p")))?;
        } else {
            writer.write_event(Event::Start(BytesStart::new("p")))?;
            writer.write_event(Event::Text(BytesText::new(line)))?;
            writer.write_event(Event::End(BytesEnd::new("p")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("Object-text")))?;
    Ok(())
}

fn write_barcode(writer: &mut XmlWriter, object: &BarcodeObject) -> Result<()> {
    let format_digits = object.format_digits.to_string();
    let mut elem = BytesStart::new("Object-barcode");
    push_common(&mut elem, &object.common);
    elem.push_attribute(("style", object.style_id.as_str()));
    elem.push_attribute(("text-flag", format_bool(object.text_flag)));
    elem.push_attribute(("checksum-flag", format_bool(object.checksum_flag)));
    elem.push_attribute(("format-digits", format_digits.as_str()));
    if object.bc_data.is_field() {
        elem.push_attribute(("data-field", object.bc_data.data()));
    } else {
        elem.push_attribute(("data", object.bc_data.data()));
    }
    push_color(&mut elem, "color", &object.bc_color);
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn write_merge(writer: &mut XmlWriter, merge: &dyn Merge) -> Result<()> {
    let mut elem = BytesStart::new("Merge");
    elem.push_attribute(("type", merge.id()));
    elem.push_attribute(("src", merge.source()));

    let excluded = merge.deselected_indices();
    if excluded.is_empty() {
        writer.write_event(Event::Empty(elem))?;
    } else {
        writer.write_event(Event::Start(elem))?;
        for index in excluded {
            let n = index.to_string();
            let mut child = BytesStart::new("Exclude");
            child.push_attribute(("n", n.as_str()));
            writer.write_event(Event::Empty(child))?;
        }
        writer.write_event(Event::End(BytesEnd::new("Merge")))?;
    }
    Ok(())
}

fn write_variables(writer: &mut XmlWriter, variables: &Variables) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("Variables")))?;
    for variable in variables.iter() {
        let mut elem = BytesStart::new("Variable");
        elem.push_attribute(("type", variable.var_type().name()));
        elem.push_attribute(("name", variable.name()));
        elem.push_attribute(("initial-value", variable.initial_value()));
        elem.push_attribute(("increment", variable.increment().name()));
        elem.push_attribute(("step-size", variable.step_size()));
        writer.write_event(Event::Empty(elem))?;
    }
    writer.write_event(Event::End(BytesEnd::new("Variables")))?;
    Ok(())
}

/// Embedded payloads for image objects with literal file names, deduped by
/// stored name, in object order.
fn write_data(writer: &mut XmlWriter, objects: &[ObjectType], dir: &Path) -> Result<()> {
    let mut files: IndexMap<String, (&str, Vec<u8>)> = IndexMap::new();
    for object in objects {
        if let ObjectType::Image(image) = object {
            if image.filename.is_field() || image.filename.data().is_empty() {
                continue;
            }
            let name = relativize(image.filename.data(), dir);
            if let Some((format, data)) = image.raster() {
                files.entry(name).or_insert((format, data.to_vec()));
            } else if let Some(data) = image.svg() {
                files.entry(name).or_insert(("SVG", data.to_vec()));
            }
        }
    }

    if files.is_empty() {
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new("Data")))?;
    for (name, (format, data)) in &files {
        let mut elem = BytesStart::new("File");
        elem.push_attribute(("name", name.as_str()));
        elem.push_attribute(("format", *format));
        writer.write_event(Event::Start(elem))?;
        writer.write_event(Event::Text(BytesText::new(&BASE64.encode(data))))?;
        writer.write_event(Event::End(BytesEnd::new("File")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("Data")))?;
    Ok(())
}

/// Store paths inside the document directory relative to it; other paths
/// are stored as given.
fn relativize(filename: &str, dir: &Path) -> String {
    let path = Path::new(filename);
    if path.is_absolute() {
        if let Ok(relative) = path.strip_prefix(dir) {
            return relative.display().to_string();
        }
    }
    filename.to_string()
}
