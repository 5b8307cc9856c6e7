//! Grouping the latest entries by the source file they were documented in.

use crate::entry::Entry;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Distinct filenames and the titled entries of each file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sections {
    /// Every filename present, in first-occurrence order.
    pub files: Vec<String>,
    /// Titled entries per filename. Files without titled entries are absent.
    pub sections: IndexMap<String, Vec<Entry>>,
}

impl Sections {
    /// Entries of the section for `file`, empty when it has none.
    pub fn section(&self, file: &str) -> &[Entry] {
        self.sections.get(file).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Builds the filename list and section map from one filtered entry list.
pub fn build_sections(entries: &[Entry]) -> Sections {
    let files: IndexSet<String> = entries.iter().map(Entry::filename_key).collect();

    let mut sections: IndexMap<String, Vec<Entry>> = IndexMap::new();
    for entry in entries.iter().filter(|e| e.has_title()) {
        sections
            .entry(entry.filename_key())
            .or_default()
            .push(entry.clone());
    }

    Sections {
        files: files.into_iter().collect(),
        sections,
    }
}
