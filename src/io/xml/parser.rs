//! Document parsing
//!
//! Forward-compatibility policy: unknown elements and attributes are
//! skipped and recorded as issues, malformed attribute values fall back
//! to defaults, and a missing embedded image degrades to an external-file
//! lookup and then to an empty image. Only structurally broken XML fails
//! the parse.

use super::dom::XmlNode;
use super::{parse_bool, DOCUMENT_ROOT, FORMAT_VERSION, OBJECTS_ROOT};
use crate::diagnostics::{Issue, LoadDiagnostics};
use crate::error::{LabelError, Result};
use crate::merge;
use crate::model::{
    BarcodeObject, BoxObject, EllipseObject, FontWeight, HAlign, ImageObject, ImagePayload,
    Increment, LineObject, Model, ObjectCommon, ObjectType, TextNode, TextObject, VAlign,
    Variable, VariableType, Variables, WrapMode,
};
use crate::template::{Frame, Template};
use crate::types::{Color, ColorNode, Distance, Matrix};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use ahash::AHashMap;

/// Embedded payloads from the Data section: stored name → (format, bytes).
type DataStore = AHashMap<String, (String, Vec<u8>)>;

/// Parses label documents and object lists.
pub struct XmlLabelParser;

impl XmlLabelParser {
    /// Read a complete document from `path`.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Model> {
        let path = path.as_ref();
        let buffer = fs::read(path)?;
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let mut model = Self::parse_buffer(&buffer, &dir)?;
        model.set_file_path(path);
        model.clear_modified();
        Ok(model)
    }

    /// Parse a complete document from a buffer. Image file references
    /// resolve against `dir`.
    pub fn parse_buffer(buffer: &[u8], dir: &Path) -> Result<Model> {
        let root = XmlNode::parse(buffer)?;
        if root.name != DOCUMENT_ROOT {
            return Err(LabelError::InvalidFormat(format!(
                "expected <{}> root, found <{}>",
                DOCUMENT_ROOT, root.name
            )));
        }
        if let Some(version) = root.attr("version") {
            if version != FORMAT_VERSION {
                return Err(LabelError::UnsupportedVersion(version.to_string()));
            }
        }

        let mut diagnostics = LoadDiagnostics::new();
        let data_store = parse_data(root.child("Data"), &mut diagnostics);

        let mut model = Model::new();
        for child in &root.children {
            match child.name.as_str() {
                "Template" => {
                    let template = parse_template(child, &mut diagnostics);
                    model.set_template(&template);
                }
                "Objects" => {
                    if let Some(rotate) = child.attr("rotate").and_then(parse_bool) {
                        model.set_rotate(rotate);
                    }
                    for object in parse_objects(child, &data_store, dir, &mut diagnostics) {
                        model.add_object(object);
                    }
                }
                "Merge" => {
                    let merge = parse_merge(child, &mut diagnostics);
                    model.set_merge(merge);
                }
                "Variables" => {
                    model.set_variables(parse_variables(child, &mut diagnostics));
                }
                "Data" => {} // consumed up front
                other => skip_unknown(other, &mut diagnostics),
            }
        }

        model.diagnostics = diagnostics;
        model.clear_modified();
        Ok(model)
    }

    /// Parse a serialized object list (clipboard flavor). Accepts both the
    /// object-list and the whole-document root. Parse problems degrade to
    /// an empty list with issues recorded on the model.
    pub fn deserialize_objects(buffer: &[u8], model: &mut Model) -> Vec<ObjectType> {
        let root = match XmlNode::parse(buffer) {
            Ok(root) => root,
            Err(e) => {
                warn!("cannot parse object buffer: {e}");
                model.diagnostics.push(Issue::BufferUnparsable {
                    reason: e.to_string(),
                });
                return Vec::new();
            }
        };
        if root.name != OBJECTS_ROOT && root.name != DOCUMENT_ROOT {
            model.diagnostics.push(Issue::UnexpectedRoot {
                name: root.name.clone(),
            });
            return Vec::new();
        }

        let dir = model.dir();
        let mut diagnostics = LoadDiagnostics::new();
        let data_store = parse_data(root.child("Data"), &mut diagnostics);
        let objects = match root.child("Objects") {
            Some(node) => parse_objects(node, &data_store, &dir, &mut diagnostics),
            None => Vec::new(),
        };
        model.diagnostics.extend(diagnostics);
        objects
    }
}

fn skip_unknown(name: &str, diagnostics: &mut LoadDiagnostics) {
    warn!(element = name, "skipping unknown element");
    diagnostics.push(Issue::UnknownElement {
        name: name.to_string(),
    });
}

// ----- attribute helpers ---------------------------------------------------

fn attr_f64(node: &XmlNode, name: &str, default: f64) -> f64 {
    node.attr(name)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn attr_distance(node: &XmlNode, name: &str) -> Distance {
    Distance::pt(attr_f64(node, name, 0.0))
}

fn attr_bool(node: &XmlNode, name: &str, default: bool) -> bool {
    node.attr(name).and_then(parse_bool).unwrap_or(default)
}

fn attr_string(node: &XmlNode, name: &str) -> String {
    node.attr(name).unwrap_or_default().to_string()
}

fn attr_matrix(node: &XmlNode, name: &str, diagnostics: &mut LoadDiagnostics) -> Matrix {
    match node.attr(name) {
        None => Matrix::IDENTITY,
        Some(value) => {
            let parts: Vec<f64> = value
                .split_whitespace()
                .filter_map(|p| p.parse().ok())
                .collect();
            if let [a, b, c, d, dx, dy] = parts[..] {
                Matrix::new(a, b, c, d, dx, dy)
            } else {
                diagnostics.push(Issue::MalformedValue {
                    attribute: name.to_string(),
                    value: value.to_string(),
                });
                Matrix::IDENTITY
            }
        }
    }
}

fn attr_color_node(node: &XmlNode, name: &str) -> ColorNode {
    if let Some(key) = node.attr(&format!("{}-field", name)) {
        return ColorNode::from_field(key);
    }
    let color = node
        .attr(name)
        .and_then(Color::from_hex)
        .unwrap_or(Color::BLACK);
    ColorNode::from_color(color)
}

fn attr_text_node(node: &XmlNode, literal_name: &str) -> TextNode {
    match node.attr(&format!("{}-field", literal_name)) {
        Some(key) => TextNode::field(key),
        None => TextNode::literal(attr_string(node, literal_name)),
    }
}

// ----- sections ------------------------------------------------------------

fn parse_data(node: Option<&XmlNode>, diagnostics: &mut LoadDiagnostics) -> DataStore {
    let mut store = DataStore::new();
    let Some(node) = node else {
        return store;
    };
    for file in node.children_named("File") {
        let name = attr_string(file, "name");
        if name.is_empty() {
            diagnostics.push(Issue::EmbeddedFileUnnamed);
            continue;
        }
        match BASE64.decode(file.text.trim()) {
            Ok(bytes) => {
                store.insert(name, (attr_string(file, "format"), bytes));
            }
            Err(e) => {
                diagnostics.push(Issue::EmbeddedFileUndecodable {
                    name,
                    reason: e.to_string(),
                });
            }
        }
    }
    store
}

fn parse_template(node: &XmlNode, diagnostics: &mut LoadDiagnostics) -> Template {
    let mut template = Template::new(
        attr_string(node, "brand"),
        attr_string(node, "part"),
        attr_string(node, "description"),
        attr_string(node, "paper-id"),
        attr_distance(node, "page-width"),
        attr_distance(node, "page-height"),
    );
    for child in &node.children {
        match child.name.as_str() {
            "Frame-rect" => template.add_frame(Frame::rect(
                attr_string(child, "id"),
                attr_distance(child, "width"),
                attr_distance(child, "height"),
                attr_distance(child, "round"),
                attr_distance(child, "x-waste"),
                attr_distance(child, "y-waste"),
            )),
            "Frame-ellipse" => template.add_frame(Frame::ellipse(
                attr_string(child, "id"),
                attr_distance(child, "width"),
                attr_distance(child, "height"),
                attr_distance(child, "waste"),
            )),
            "Frame-round" => template.add_frame(Frame::round(
                attr_string(child, "id"),
                attr_distance(child, "radius"),
                attr_distance(child, "waste"),
            )),
            other => skip_unknown(other, diagnostics),
        }
    }
    template
}

fn parse_merge(
    node: &XmlNode,
    diagnostics: &mut LoadDiagnostics,
) -> Box<dyn merge::Merge> {
    let id = node.attr("type").unwrap_or(merge::NONE_ID);
    let mut backend = merge::create_or_none(id, diagnostics);
    backend.set_source(node.attr("src").unwrap_or_default());
    let excluded: Vec<usize> = node
        .children_named("Exclude")
        .filter_map(|child| child.attr("n").and_then(|n| n.parse().ok()))
        .collect();
    if !excluded.is_empty() {
        backend.set_deselected_indices(&excluded);
    }
    backend
}

fn parse_variables(node: &XmlNode, diagnostics: &mut LoadDiagnostics) -> Variables {
    let mut variables = Variables::new();
    for child in &node.children {
        if child.name != "Variable" {
            skip_unknown(&child.name, diagnostics);
            continue;
        }
        let var_type = child
            .attr("type")
            .and_then(VariableType::from_name)
            .unwrap_or_default();
        let increment = child
            .attr("increment")
            .and_then(Increment::from_name)
            .unwrap_or_default();
        variables.add_variable(Variable::new(
            var_type,
            attr_string(child, "name"),
            attr_string(child, "initial-value"),
            increment,
            attr_string(child, "step-size"),
        ));
    }
    variables
}

// ----- objects -------------------------------------------------------------

fn parse_objects(
    node: &XmlNode,
    data_store: &DataStore,
    dir: &Path,
    diagnostics: &mut LoadDiagnostics,
) -> Vec<ObjectType> {
    let mut objects = Vec::new();
    for child in &node.children {
        let object = match child.name.as_str() {
            "Object-box" => Some(ObjectType::Box(parse_box(child, diagnostics))),
            "Object-ellipse" => Some(ObjectType::Ellipse(parse_ellipse(child, diagnostics))),
            "Object-line" => Some(ObjectType::Line(parse_line(child, diagnostics))),
            "Object-image" => Some(ObjectType::Image(parse_image(
                child,
                data_store,
                dir,
                diagnostics,
            ))),
            "Object-text" => Some(ObjectType::Text(parse_text(child, diagnostics))),
            "Object-barcode" => Some(ObjectType::Barcode(parse_barcode(child, diagnostics))),
            other => {
                skip_unknown(other, diagnostics);
                None
            }
        };
        objects.extend(object);
    }
    objects
}

/// Common attributes; a fresh id is generated for every parsed object.
fn parse_common(node: &XmlNode, diagnostics: &mut LoadDiagnostics) -> ObjectCommon {
    let mut common = ObjectCommon::new();
    common.x0 = attr_distance(node, "x");
    common.y0 = attr_distance(node, "y");
    common.w = attr_distance(node, "w");
    common.h = attr_distance(node, "h");
    common.lock_aspect_ratio = attr_bool(node, "lock-aspect-ratio", false);
    common.matrix = attr_matrix(node, "transform", diagnostics);
    common.shadow = attr_bool(node, "shadow", false);
    common.shadow_x = attr_distance(node, "shadow-x");
    common.shadow_y = attr_distance(node, "shadow-y");
    common.shadow_opacity = attr_f64(node, "shadow-opacity", 1.0);
    common.shadow_color = attr_color_node(node, "shadow-color");
    common
}

fn parse_box(node: &XmlNode, diagnostics: &mut LoadDiagnostics) -> BoxObject {
    let mut object = BoxObject::new();
    object.common = parse_common(node, diagnostics);
    object.line_width = attr_distance(node, "line-width");
    object.line_color = attr_color_node(node, "line-color");
    object.fill_color = attr_color_node(node, "fill-color");
    object
}

fn parse_ellipse(node: &XmlNode, diagnostics: &mut LoadDiagnostics) -> EllipseObject {
    let mut object = EllipseObject::new();
    object.common = parse_common(node, diagnostics);
    object.line_width = attr_distance(node, "line-width");
    object.line_color = attr_color_node(node, "line-color");
    object.fill_color = attr_color_node(node, "fill-color");
    object
}

fn parse_line(node: &XmlNode, diagnostics: &mut LoadDiagnostics) -> LineObject {
    let mut object = LineObject::new();
    object.common = parse_common(node, diagnostics);
    object.line_width = attr_distance(node, "line-width");
    object.line_color = attr_color_node(node, "line-color");
    object
}

fn parse_text(node: &XmlNode, diagnostics: &mut LoadDiagnostics) -> TextObject {
    let mut object = TextObject::new();
    object.common = parse_common(node, diagnostics);
    object.font_family = attr_string(node, "font-family");
    object.font_size = attr_f64(node, "font-size", 10.0);
    object.font_weight = node
        .attr("font-weight")
        .and_then(FontWeight::from_name)
        .unwrap_or_default();
    object.font_italic = attr_bool(node, "italic", false);
    object.font_underline = attr_bool(node, "underline", false);
    object.text_color = attr_color_node(node, "color");
    object.h_align = node
        .attr("h-align")
        .and_then(HAlign::from_name)
        .unwrap_or_default();
    object.v_align = node
        .attr("v-align")
        .and_then(VAlign::from_name)
        .unwrap_or_default();
    object.wrap_mode = node
        .attr("wrap-mode")
        .and_then(WrapMode::from_name)
        .unwrap_or_default();
    object.line_spacing = attr_f64(node, "line-spacing", 1.0);
    object.auto_shrink = attr_bool(node, "auto-shrink", false);

    let lines: Vec<&str> = node
        .children_named("p")
        .map(|p| p.text.as_str())
        .collect();
    object.text = lines.join("\n");
    object
}

fn parse_barcode(node: &XmlNode, diagnostics: &mut LoadDiagnostics) -> BarcodeObject {
    let mut object = BarcodeObject::new();
    object.common = parse_common(node, diagnostics);
    object.style_id = attr_string(node, "style");
    object.text_flag = attr_bool(node, "text-flag", true);
    object.checksum_flag = attr_bool(node, "checksum-flag", true);
    object.format_digits = node
        .attr("format-digits")
        .and_then(|value| value.parse().ok())
        .unwrap_or(10);
    object.bc_data = attr_text_node(node, "data");
    object.bc_color = attr_color_node(node, "color");
    object
}

fn parse_image(
    node: &XmlNode,
    data_store: &DataStore,
    dir: &Path,
    diagnostics: &mut LoadDiagnostics,
) -> ImageObject {
    let mut object = ImageObject::new();
    object.common = parse_common(node, diagnostics);
    object.filename = attr_text_node(node, "src");

    // Field references and unnamed images carry no payload
    if object.filename.is_field() || object.filename.data().is_empty() {
        return object;
    }

    let name = object.filename.data().to_string();
    if let Some((format, bytes)) = data_store.get(&name) {
        object.payload = payload_from(format, bytes.clone());
        object.filename = TextNode::literal(absolutize(&name, dir));
        return object;
    }

    // Recovery path: the referenced payload is not embedded. Try the file
    // next to the document; failing that, leave the image empty and the
    // file name untouched.
    let candidate = dir.join(&name);
    warn!(
        "Embedded file \"{}\" missing. Trying actual file.",
        candidate.display()
    );
    diagnostics.push(Issue::EmbeddedFileMissing {
        path: candidate.display().to_string(),
    });
    match fs::read(&candidate) {
        Ok(bytes) => {
            object.payload = payload_from(ImagePayload::format_for(&name), bytes);
            object.filename = TextNode::literal(absolutize(&name, dir));
        }
        Err(e) => {
            warn!("cannot read image file \"{}\": {}", candidate.display(), e);
            diagnostics.push(Issue::ImageFileUnreadable {
                path: candidate.display().to_string(),
            });
        }
    }
    object
}

fn payload_from(format: &str, bytes: Vec<u8>) -> ImagePayload {
    if format.eq_ignore_ascii_case("svg") {
        ImagePayload::Svg { data: bytes }
    } else {
        ImagePayload::Raster {
            format: format.to_string(),
            data: bytes,
        }
    }
}

fn absolutize(filename: &str, dir: &Path) -> String {
    let path = Path::new(filename);
    if path.is_absolute() {
        filename.to_string()
    } else {
        dir.join(path).display().to_string()
    }
}
