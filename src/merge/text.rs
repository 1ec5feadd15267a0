//! Delimited-text merge backends
//!
//! One generic reader parameterized by a delimiter character and a "first
//! line holds field keys" flag. The concrete backends (CSV/TSV/semicolon,
//! keyed or positional) only bind those two parameters.

use super::{Merge, MergeData, Record};
use crate::diagnostics::{Issue, LoadDiagnostics};
use std::fs::File;
use tracing::warn;

pub const CSV_ID: &str = "Text/Comma";
pub const CSV_KEYS_ID: &str = "Text/Comma/Line1Keys";
pub const TSV_ID: &str = "Text/Tab";
pub const TSV_KEYS_ID: &str = "Text/Tab/Line1Keys";
pub const SEMICOLON_ID: &str = "Text/Semicolon";
pub const SEMICOLON_KEYS_ID: &str = "Text/Semicolon/Line1Keys";

/// Generic delimited-line merge backend.
#[derive(Debug, Clone)]
pub struct TextMerge {
    id: &'static str,
    delimiter: u8,
    line1_keys: bool,
    data: MergeData,
}

impl TextMerge {
    fn new(id: &'static str, delimiter: u8, line1_keys: bool) -> Self {
        TextMerge {
            id,
            delimiter,
            line1_keys,
            data: MergeData::default(),
        }
    }

    /// Comma-delimited, positional keys ("1", "2", ...)
    pub fn csv() -> Box<dyn Merge> {
        Box::new(TextMerge::new(CSV_ID, b',', false))
    }

    /// Comma-delimited, first line holds field keys
    pub fn csv_keys() -> Box<dyn Merge> {
        Box::new(TextMerge::new(CSV_KEYS_ID, b',', true))
    }

    /// Tab-delimited, positional keys
    pub fn tsv() -> Box<dyn Merge> {
        Box::new(TextMerge::new(TSV_ID, b'\t', false))
    }

    /// Tab-delimited, first line holds field keys
    pub fn tsv_keys() -> Box<dyn Merge> {
        Box::new(TextMerge::new(TSV_KEYS_ID, b'\t', true))
    }

    /// Semicolon-delimited, positional keys
    pub fn semicolon() -> Box<dyn Merge> {
        Box::new(TextMerge::new(SEMICOLON_ID, b';', false))
    }

    /// Semicolon-delimited, first line holds field keys
    pub fn semicolon_keys() -> Box<dyn Merge> {
        Box::new(TextMerge::new(SEMICOLON_KEYS_ID, b';', true))
    }

    fn read_records(&self, file: File, diagnostics: &mut LoadDiagnostics) -> Vec<Record> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut keys: Option<Vec<String>> = None;
        let mut records = Vec::new();

        for (line, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!(source = %self.source(), line, "skipping malformed merge row: {e}");
                    diagnostics.push(Issue::MergeRowMalformed {
                        source: self.source().to_string(),
                        line: line + 1,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if self.line1_keys && keys.is_none() {
                keys = Some(row.iter().map(str::to_string).collect());
                continue;
            }

            let record = match &keys {
                Some(keys) => keys
                    .iter()
                    .zip(row.iter())
                    .map(|(k, v)| (k.clone(), v.to_string()))
                    .collect(),
                None => row
                    .iter()
                    .enumerate()
                    .map(|(i, v)| ((i + 1).to_string(), v.to_string()))
                    .collect(),
            };
            records.push(record);
        }

        records
    }
}

impl Merge for TextMerge {
    fn id(&self) -> &str {
        self.id
    }

    fn read_data(&mut self) -> LoadDiagnostics {
        let mut diagnostics = LoadDiagnostics::new();

        if self.data.source.is_empty() {
            self.data.set_records(Vec::new());
            return diagnostics;
        }

        let records = match File::open(&self.data.source) {
            Ok(file) => self.read_records(file, &mut diagnostics),
            Err(e) => {
                warn!(source = %self.data.source, "cannot open merge source: {e}");
                diagnostics.push(Issue::MergeSourceUnavailable {
                    source: self.data.source.clone(),
                    reason: e.to_string(),
                });
                Vec::new()
            }
        };

        self.data.set_records(records);
        diagnostics
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_csv_keys() {
        let file = write_temp("name,color\nAlice,red\nBob,blue\n");
        let mut merge = TextMerge::csv_keys();
        merge.set_source(file.path().to_str().unwrap());
        let issues = merge.read_data();
        assert!(issues.is_empty());
        assert_eq!(merge.record_count(), 2);
        assert_eq!(merge.record_list()[0].get("name"), Some("Alice"));
        assert_eq!(merge.record_list()[1].get("color"), Some("blue"));
    }

    #[test]
    fn test_csv_positional_keys() {
        let file = write_temp("Alice,red\nBob,blue\n");
        let mut merge = TextMerge::csv();
        merge.set_source(file.path().to_str().unwrap());
        merge.read_data();
        assert_eq!(merge.record_count(), 2);
        assert_eq!(merge.record_list()[0].get("1"), Some("Alice"));
        assert_eq!(merge.record_list()[0].get("2"), Some("red"));
    }

    #[test]
    fn test_tsv_keys() {
        let file = write_temp("name\tcolor\nAlice\tred\n");
        let mut merge = TextMerge::tsv_keys();
        merge.set_source(file.path().to_str().unwrap());
        merge.read_data();
        assert_eq!(merge.record_count(), 1);
        assert_eq!(merge.record_list()[0].get("color"), Some("red"));
    }

    #[test]
    fn test_quoted_fields() {
        let file = write_temp("name,addr\n\"Smith, Jane\",\"12 Main St\"\n");
        let mut merge = TextMerge::csv_keys();
        merge.set_source(file.path().to_str().unwrap());
        merge.read_data();
        assert_eq!(merge.record_list()[0].get("name"), Some("Smith, Jane"));
    }

    #[test]
    fn test_short_row_fields_absent() {
        let file = write_temp("a,b,c\n1,2\n");
        let mut merge = TextMerge::csv_keys();
        merge.set_source(file.path().to_str().unwrap());
        merge.read_data();
        let record = &merge.record_list()[0];
        assert_eq!(record.get("b"), Some("2"));
        assert_eq!(record.get("c"), None);
    }

    #[test]
    fn test_missing_file_yields_zero_records() {
        let mut merge = TextMerge::csv_keys();
        merge.set_source("/definitely/not/here.csv");
        let issues = merge.read_data();
        assert_eq!(merge.record_count(), 0);
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, Issue::MergeSourceUnavailable { .. })));
        assert!(!issues.has_errors());
    }

    #[test]
    fn test_selection() {
        let file = write_temp("a\n1\n2\n3\n");
        let mut merge = TextMerge::csv_keys();
        merge.set_source(file.path().to_str().unwrap());
        merge.read_data();
        assert_eq!(merge.selected_records().len(), 3);

        merge.unselect(1);
        assert_eq!(merge.selected_records().len(), 2);
        assert!(!merge.is_selected(1));

        // Deselection is applied again on re-read
        merge.read_data();
        assert_eq!(merge.selected_records().len(), 2);

        merge.select_all();
        assert_eq!(merge.selected_records().len(), 3);
    }
}
