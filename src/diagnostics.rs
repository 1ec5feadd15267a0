//! Load diagnostics.
//!
//! Recoverable problems met while loading a document or reading a merge
//! source are recorded as typed [`Issue`]s instead of failing the
//! operation: unknown elements are skipped, malformed values fall back to
//! defaults, a missing embedded image degrades to an external-file lookup.
//! After a load the caller inspects
//! [`Model::diagnostics`](crate::model::Model) to see what was recovered.

use std::fmt;

/// How bad an issue is. Warnings are degraded behavior the document
/// author may expect; errors mean content was dropped or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One recoverable problem met while loading document content or reading
/// a merge source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// An element this version does not know; skipped.
    UnknownElement { name: String },
    /// An attribute value that did not parse; the default was used.
    MalformedValue { attribute: String, value: String },
    /// A Data entry without a name; skipped.
    EmbeddedFileUnnamed,
    /// A Data entry whose payload did not decode; skipped.
    EmbeddedFileUndecodable { name: String, reason: String },
    /// An image names a payload that is not embedded; the file next to
    /// the document is tried instead.
    EmbeddedFileMissing { path: String },
    /// Neither an embedded payload nor a readable file; the image stays
    /// empty and keeps its file name.
    ImageFileUnreadable { path: String },
    /// A merge backend id with no registered factory; merge disabled.
    MergeBackendUnknown { id: String },
    /// The merge source could not be opened; zero records.
    MergeSourceUnavailable { source: String, reason: String },
    /// A merge row that did not parse; skipped.
    MergeRowMalformed {
        source: String,
        line: usize,
        reason: String,
    },
    /// An object buffer that is not parseable XML; no objects.
    BufferUnparsable { reason: String },
    /// An object buffer with an unexpected root element; no objects.
    UnexpectedRoot { name: String },
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnknownElement { .. }
            | Issue::EmbeddedFileUnnamed
            | Issue::EmbeddedFileMissing { .. }
            | Issue::ImageFileUnreadable { .. }
            | Issue::MergeBackendUnknown { .. }
            | Issue::MergeSourceUnavailable { .. } => Severity::Warning,
            Issue::MalformedValue { .. }
            | Issue::EmbeddedFileUndecodable { .. }
            | Issue::MergeRowMalformed { .. }
            | Issue::BufferUnparsable { .. }
            | Issue::UnexpectedRoot { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::UnknownElement { name } => {
                write!(f, "skipping unknown element <{}>", name)
            }
            Issue::MalformedValue { attribute, value } => {
                write!(f, "malformed {} \"{}\", using default", attribute, value)
            }
            Issue::EmbeddedFileUnnamed => write!(f, "skipping unnamed embedded file"),
            Issue::EmbeddedFileUndecodable { name, reason } => {
                write!(f, "cannot decode embedded file \"{}\": {}", name, reason)
            }
            Issue::EmbeddedFileMissing { path } => {
                write!(f, "embedded file \"{}\" missing, trying actual file", path)
            }
            Issue::ImageFileUnreadable { path } => {
                write!(f, "cannot read image file \"{}\"", path)
            }
            Issue::MergeBackendUnknown { id } => {
                write!(f, "unknown merge backend \"{}\", merge disabled", id)
            }
            Issue::MergeSourceUnavailable { source, reason } => {
                write!(f, "cannot open merge source \"{}\": {}", source, reason)
            }
            Issue::MergeRowMalformed {
                source,
                line,
                reason,
            } => {
                write!(f, "malformed row {} in \"{}\": {}", line, source, reason)
            }
            Issue::BufferUnparsable { reason } => {
                write!(f, "cannot parse object buffer: {}", reason)
            }
            Issue::UnexpectedRoot { name } => {
                write!(f, "unexpected root element <{}>", name)
            }
        }
    }
}

/// Issues collected by one load or merge-read operation.
#[derive(Debug, Clone, Default)]
pub struct LoadDiagnostics {
    issues: Vec<Issue>,
}

impl LoadDiagnostics {
    pub fn new() -> Self {
        LoadDiagnostics::default()
    }

    /// Record an issue.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    /// Was any content dropped or replaced (as opposed to degraded)?
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity() == Severity::Error)
    }

    /// Fold the issues of another operation into this collection.
    pub fn extend(&mut self, other: LoadDiagnostics) {
        self.issues.extend(other.issues);
    }

    pub fn clear(&mut self) {
        self.issues.clear();
    }

    pub fn into_vec(self) -> Vec<Issue> {
        self.issues
    }
}

impl IntoIterator for LoadDiagnostics {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a LoadDiagnostics {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}
