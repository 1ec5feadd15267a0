//! Merge-source backends
//!
//! A merge backend turns an external data source into an ordered sequence of
//! [`Record`]s. Backends are selected by a stable string id through a
//! process-wide registry; each concrete backend registers a zero-argument
//! factory. Reading is lazy — records are only loaded when
//! [`Merge::read_data`] is called — and read failures degrade to empty or
//! partial record lists with recorded issues, never a crash.

pub mod record;
pub mod text;

pub use record::Record;
pub use text::TextMerge;

use crate::diagnostics::{Issue, LoadDiagnostics};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use std::collections::BTreeSet;
use std::sync::RwLock;

/// Backend id used when a document has no merge configured.
pub const NONE_ID: &str = "None";

/// State shared by all merge backends: the source locator, the records read
/// from it, and per-record selection.
#[derive(Debug, Clone, Default)]
pub struct MergeData {
    source: String,
    records: Vec<Record>,
    selected: Vec<bool>,
    /// Deselection persists across saves without forcing a source read;
    /// it is applied whenever the source is (re)read.
    deselected: BTreeSet<usize>,
}

impl MergeData {
    fn apply_selection(&mut self) {
        self.selected = (0..self.records.len())
            .map(|i| !self.deselected.contains(&i))
            .collect();
    }

    fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.apply_selection();
    }
}

/// A pluggable merge-source backend.
pub trait Merge {
    /// Stable backend id (registry key).
    fn id(&self) -> &str;

    /// Read records from the current source into memory. Returns the
    /// issues met on the way (missing file, malformed rows, ...); the
    /// record list is empty or partial on failure.
    fn read_data(&mut self) -> LoadDiagnostics;

    /// Shared backend state.
    fn data(&self) -> &MergeData;

    /// Shared backend state, mutable.
    fn data_mut(&mut self) -> &mut MergeData;

    /// Clone into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Merge>;

    /// The external resource this backend reads (e.g. a file path).
    fn source(&self) -> &str {
        &self.data().source
    }

    /// Point the backend at a new source. Previously read records are
    /// dropped; call [`Merge::read_data`] to load from the new source.
    fn set_source(&mut self, source: &str) {
        let data = self.data_mut();
        data.source = source.to_string();
        data.records.clear();
        data.selected.clear();
    }

    /// Records read so far, in source order.
    fn record_list(&self) -> &[Record] {
        &self.data().records
    }

    /// Number of records read.
    fn record_count(&self) -> usize {
        self.data().records.len()
    }

    /// Is the record at `index` selected for output?
    fn is_selected(&self, index: usize) -> bool {
        self.data().selected.get(index).copied().unwrap_or(false)
    }

    /// Select the record at `index` for output.
    fn select(&mut self, index: usize) {
        let data = self.data_mut();
        data.deselected.remove(&index);
        if let Some(flag) = data.selected.get_mut(index) {
            *flag = true;
        }
    }

    /// Exclude the record at `index` from output.
    fn unselect(&mut self, index: usize) {
        let data = self.data_mut();
        data.deselected.insert(index);
        if let Some(flag) = data.selected.get_mut(index) {
            *flag = false;
        }
    }

    /// Select every record.
    fn select_all(&mut self) {
        let data = self.data_mut();
        data.deselected.clear();
        data.selected.iter_mut().for_each(|flag| *flag = true);
    }

    /// Exclude every record.
    fn unselect_all(&mut self) {
        let data = self.data_mut();
        for i in 0..data.records.len() {
            data.deselected.insert(i);
        }
        data.selected.iter_mut().for_each(|flag| *flag = false);
    }

    /// Records selected for output, in source order.
    fn selected_records(&self) -> Vec<&Record> {
        let data = self.data();
        data.records
            .iter()
            .enumerate()
            .filter(|(i, _)| data.selected.get(*i).copied().unwrap_or(false))
            .map(|(_, r)| r)
            .collect()
    }

    /// Indices excluded from output, ascending. Used by the document codec.
    fn deselected_indices(&self) -> Vec<usize> {
        self.data().deselected.iter().copied().collect()
    }

    /// Restore excluded indices (from a parsed document).
    fn set_deselected_indices(&mut self, indices: &[usize]) {
        let data = self.data_mut();
        data.deselected = indices.iter().copied().collect();
        data.apply_selection();
    }
}

impl Clone for Box<dyn Merge> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl std::fmt::Debug for Box<dyn Merge> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Merge")
            .field("id", &self.id())
            .field("source", &self.source())
            .field("records", &self.record_count())
            .finish()
    }
}

/// The "no merge" backend: no source, no records.
#[derive(Debug, Clone, Default)]
pub struct NoMerge {
    data: MergeData,
}

impl NoMerge {
    pub fn new() -> Self {
        NoMerge::default()
    }
}

impl Merge for NoMerge {
    fn id(&self) -> &str {
        NONE_ID
    }

    fn read_data(&mut self) -> LoadDiagnostics {
        LoadDiagnostics::new()
    }

    fn data(&self) -> &MergeData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut MergeData {
        &mut self.data
    }

    fn clone_box(&self) -> Box<dyn Merge> {
        Box::new(self.clone())
    }
}

type Factory = fn() -> Box<dyn Merge>;

static REGISTRY: Lazy<RwLock<AHashMap<String, Factory>>> = Lazy::new(|| {
    let mut map: AHashMap<String, Factory> = AHashMap::new();
    map.insert(NONE_ID.to_string(), || Box::new(NoMerge::new()));
    map.insert(text::CSV_ID.to_string(), TextMerge::csv);
    map.insert(text::CSV_KEYS_ID.to_string(), TextMerge::csv_keys);
    map.insert(text::TSV_ID.to_string(), TextMerge::tsv);
    map.insert(text::TSV_KEYS_ID.to_string(), TextMerge::tsv_keys);
    map.insert(text::SEMICOLON_ID.to_string(), TextMerge::semicolon);
    map.insert(
        text::SEMICOLON_KEYS_ID.to_string(),
        TextMerge::semicolon_keys,
    );
    RwLock::new(map)
});

/// Register a merge backend factory under `id`. Intended to run at process
/// start; replacing an existing id is allowed.
pub fn register(id: &str, factory: Factory) {
    REGISTRY
        .write()
        .expect("merge registry poisoned")
        .insert(id.to_string(), factory);
}

/// Create the backend registered under `id`. Unknown ids yield `None`.
pub fn create(id: &str) -> Option<Box<dyn Merge>> {
    REGISTRY
        .read()
        .expect("merge registry poisoned")
        .get(id)
        .map(|factory| factory())
}

/// Ids of all registered backends, sorted.
pub fn ids() -> Vec<String> {
    let mut ids: Vec<String> = REGISTRY
        .read()
        .expect("merge registry poisoned")
        .keys()
        .cloned()
        .collect();
    ids.sort();
    ids
}

/// Create the backend for `id`, falling back to [`NoMerge`] with a
/// recorded issue when the id is unknown. Used on document load, where an
/// unrecognized backend disables the merge feature but not the document.
pub fn create_or_none(id: &str, diagnostics: &mut LoadDiagnostics) -> Box<dyn Merge> {
    match create(id) {
        Some(merge) => merge,
        None => {
            diagnostics.push(Issue::MergeBackendUnknown { id: id.to_string() });
            Box::new(NoMerge::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_create() {
        let merge = create("Text/Comma/Line1Keys").unwrap();
        assert_eq!(merge.id(), "Text/Comma/Line1Keys");

        let none = create("None").unwrap();
        assert_eq!(none.id(), "None");
    }

    #[test]
    fn test_registry_unknown_id() {
        assert!(create("Bogus/Backend").is_none());
    }

    #[test]
    fn test_create_or_none_falls_back() {
        let mut diagnostics = LoadDiagnostics::new();
        let merge = create_or_none("Bogus/Backend", &mut diagnostics);
        assert_eq!(merge.id(), NONE_ID);
        assert!(diagnostics
            .iter()
            .any(|issue| matches!(issue, Issue::MergeBackendUnknown { id } if id == "Bogus/Backend")));
    }

    #[test]
    fn test_no_merge_degrades() {
        let mut merge = NoMerge::new();
        let issues = merge.read_data();
        assert!(issues.is_empty());
        assert!(merge.record_list().is_empty());
        assert!(merge.selected_records().is_empty());
        assert!(!merge.is_selected(0));
    }

    #[test]
    fn test_selection_roundtrip_without_read() {
        let mut merge = create("Text/Comma").unwrap();
        merge.set_deselected_indices(&[1, 3]);
        assert_eq!(merge.deselected_indices(), vec![1, 3]);
    }
}
