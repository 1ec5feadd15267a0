//! The label document model
//!
//! A [`Model`] holds the authoritative in-memory state of one open document
//! and mediates all mutation so dependent views observe a single consistent
//! state. Mutations are synchronous; observers are notified after each
//! mutation completes.

pub mod barcode_object;
pub mod box_object;
pub mod ellipse_object;
pub mod event;
pub mod image_object;
pub mod line_object;
pub mod object;
pub mod text_node;
pub mod text_object;
pub mod variable;

pub use barcode_object::BarcodeObject;
pub use box_object::BoxObject;
pub use ellipse_object::EllipseObject;
pub use event::{ModelEvent, ObserverId, ObserverList};
pub use image_object::{ImageObject, ImagePayload};
pub use line_object::LineObject;
pub use object::{LabelObject, ObjectCommon, ObjectType};
pub use text_node::TextNode;
pub use text_object::{FontWeight, HAlign, TextObject, VAlign, WrapMode};
pub use variable::{Increment, Variable, VariableType, Variables};

use crate::diagnostics::LoadDiagnostics;
use crate::merge::{Merge, NoMerge};
use crate::template::{Frame, Template};
use crate::types::{Distance, ObjectId};
use std::path::{Path, PathBuf};

/// One open label document.
#[derive(Debug)]
pub struct Model {
    template: Option<Template>,
    rotate: bool,
    objects: Vec<ObjectType>,
    variables: Variables,
    merge: Box<dyn Merge>,
    file_path: Option<PathBuf>,
    modified: bool,
    /// Recoverable issues from the last load / merge read
    pub diagnostics: LoadDiagnostics,
    observers: ObserverList,
}

impl Model {
    /// Create an empty document: no template, no objects, no merge.
    pub fn new() -> Self {
        Model {
            template: None,
            rotate: false,
            objects: Vec::new(),
            variables: Variables::new(),
            merge: Box::new(NoMerge::new()),
            file_path: None,
            modified: false,
            diagnostics: LoadDiagnostics::new(),
            observers: ObserverList::new(),
        }
    }

    fn mark_modified(&mut self) {
        if !self.modified {
            self.modified = true;
            self.observers.emit(ModelEvent::ModifiedChanged);
        }
    }

    // ----- observers -------------------------------------------------------

    /// Attach a change observer.
    pub fn subscribe(&mut self, observer: impl Fn(ModelEvent) + 'static) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Detach a change observer.
    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.unsubscribe(id);
    }

    /// Record a content change made directly through [`Model::object_mut`].
    pub fn content_changed(&mut self) {
        self.mark_modified();
        self.observers.emit(ModelEvent::Changed);
    }

    // ----- template / geometry --------------------------------------------

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    /// Install a copy of `template`.
    pub fn set_template(&mut self, template: &Template) {
        self.template = Some(template.clone());
        self.mark_modified();
        self.observers.emit(ModelEvent::TemplateChanged);
        self.observers.emit(ModelEvent::Changed);
    }

    /// The primary frame of the current template.
    pub fn frame(&self) -> Option<&Frame> {
        self.template.as_ref().and_then(Template::frame)
    }

    pub fn rotate(&self) -> bool {
        self.rotate
    }

    pub fn set_rotate(&mut self, rotate: bool) {
        if self.rotate != rotate {
            self.rotate = rotate;
            self.mark_modified();
            self.observers.emit(ModelEvent::Changed);
        }
    }

    /// Label width: frame width, or height when rotated. Zero without a
    /// template.
    pub fn w(&self) -> Distance {
        match self.frame() {
            Some(frame) if self.rotate => frame.h(),
            Some(frame) => frame.w(),
            None => Distance::ZERO,
        }
    }

    /// Label height: frame height, or width when rotated.
    pub fn h(&self) -> Distance {
        match self.frame() {
            Some(frame) if self.rotate => frame.w(),
            Some(frame) => frame.h(),
            None => Distance::ZERO,
        }
    }

    // ----- objects ---------------------------------------------------------

    /// Objects in z-order, back to front.
    pub fn objects(&self) -> &[ObjectType] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn object(&self, id: ObjectId) -> Option<&ObjectType> {
        self.objects.iter().find(|o| o.id() == id)
    }

    /// Mutable object access. Call [`Model::content_changed`] after editing.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut ObjectType> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    fn position(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id() == id)
    }

    /// Append an object at the top of the z-order.
    pub fn add_object(&mut self, object: ObjectType) -> ObjectId {
        let id = object.id();
        self.objects.push(object);
        self.mark_modified();
        self.observers.emit(ModelEvent::Changed);
        id
    }

    /// Remove an object. Unknown ids are a no-op.
    pub fn delete_object(&mut self, id: ObjectId) -> Option<ObjectType> {
        let index = self.position(id)?;
        let object = self.objects.remove(index);
        self.mark_modified();
        self.observers.emit(ModelEvent::Changed);
        Some(object)
    }

    /// Move an object one step toward the front.
    pub fn raise_object(&mut self, id: ObjectId) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.objects.len() => {
                self.objects.swap(index, index + 1);
                self.mark_modified();
                self.observers.emit(ModelEvent::Changed);
                true
            }
            _ => false,
        }
    }

    /// Move an object one step toward the back.
    pub fn lower_object(&mut self, id: ObjectId) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                self.objects.swap(index, index - 1);
                self.mark_modified();
                self.observers.emit(ModelEvent::Changed);
                true
            }
            _ => false,
        }
    }

    /// Move an object to the front of the z-order.
    pub fn raise_object_to_top(&mut self, id: ObjectId) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.objects.len() => {
                let object = self.objects.remove(index);
                self.objects.push(object);
                self.mark_modified();
                self.observers.emit(ModelEvent::Changed);
                true
            }
            _ => false,
        }
    }

    /// Move an object to the back of the z-order.
    pub fn lower_object_to_bottom(&mut self, id: ObjectId) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                let object = self.objects.remove(index);
                self.objects.insert(0, object);
                self.mark_modified();
                self.observers.emit(ModelEvent::Changed);
                true
            }
            _ => false,
        }
    }

    // ----- selection -------------------------------------------------------

    pub fn select_object(&mut self, id: ObjectId) {
        if let Some(object) = self.object_mut(id) {
            object.common_mut().selected = true;
            self.observers.emit(ModelEvent::SelectionChanged);
        }
    }

    pub fn unselect_object(&mut self, id: ObjectId) {
        if let Some(object) = self.object_mut(id) {
            object.common_mut().selected = false;
            self.observers.emit(ModelEvent::SelectionChanged);
        }
    }

    pub fn select_all(&mut self) {
        for object in &mut self.objects {
            object.common_mut().selected = true;
        }
        self.observers.emit(ModelEvent::SelectionChanged);
    }

    pub fn unselect_all(&mut self) {
        for object in &mut self.objects {
            object.common_mut().selected = false;
        }
        self.observers.emit(ModelEvent::SelectionChanged);
    }

    pub fn is_selection_empty(&self) -> bool {
        !self.objects.iter().any(|o| o.common().selected)
    }

    pub fn selected_objects(&self) -> Vec<&ObjectType> {
        self.objects.iter().filter(|o| o.common().selected).collect()
    }

    /// Delete every selected object.
    pub fn delete_selection(&mut self) {
        let before = self.objects.len();
        self.objects.retain(|o| !o.common().selected);
        if self.objects.len() != before {
            self.mark_modified();
            self.observers.emit(ModelEvent::Changed);
        }
        self.observers.emit(ModelEvent::SelectionChanged);
    }

    // ----- merge -----------------------------------------------------------

    pub fn merge(&self) -> &dyn Merge {
        self.merge.as_ref()
    }

    pub fn merge_mut(&mut self) -> &mut Box<dyn Merge> {
        &mut self.merge
    }

    /// Replace the merge backend. The old backend is dropped with the model.
    pub fn set_merge(&mut self, merge: Box<dyn Merge>) {
        self.merge = merge;
        self.mark_modified();
        self.observers.emit(ModelEvent::MergeChanged);
    }

    /// Read (or re-read) merge records; issues met on the way are appended
    /// to the model's diagnostics.
    pub fn read_merge_data(&mut self) {
        let issues = self.merge.read_data();
        self.diagnostics.extend(issues);
        self.observers.emit(ModelEvent::MergeChanged);
    }

    // ----- variables -------------------------------------------------------

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.add_variable(variable);
        self.mark_modified();
        self.observers.emit(ModelEvent::VariablesChanged);
    }

    pub fn delete_variable(&mut self, name: &str) {
        if self.variables.delete_variable(name).is_some() {
            self.mark_modified();
            self.observers.emit(ModelEvent::VariablesChanged);
        }
    }

    /// Replace the whole variable collection (document load).
    pub fn set_variables(&mut self, variables: Variables) {
        self.variables = variables;
        self.mark_modified();
        self.observers.emit(ModelEvent::VariablesChanged);
    }

    // ----- modified / file state ------------------------------------------

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self) {
        self.mark_modified();
    }

    /// Reset after a successful save or load.
    pub fn clear_modified(&mut self) {
        if self.modified {
            self.modified = false;
            self.observers.emit(ModelEvent::ModifiedChanged);
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn set_file_path(&mut self, path: impl Into<PathBuf>) {
        self.file_path = Some(path.into());
        self.observers.emit(ModelEvent::NameChanged);
    }

    /// Directory image paths resolve against: the document's directory, or
    /// the process working directory for unsaved documents.
    pub fn dir(&self) -> PathBuf {
        self.file_path
            .as_ref()
            .and_then(|p| p.parent())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Base name for window titles; "Untitled" before the first save.
    pub fn short_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
