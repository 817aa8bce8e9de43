//! Japanese indexing data inherited from the Tanaka corpus.
//!
//! Each entry ties a Japanese sentence to the English sentence that
//! carries its meaning, along with the indexing text used by
//! Japanese dictionary tooling.
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Datafile, FromRow, Records, Row, Table, TableKind};
use crate::error::Error;
use crate::version::{Version, VersionFile, VersionLookup};

/// One indexing entry.
///
/// Ids are signed: the corpus marks a missing meaning with `-1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JpnIndex {
    sentence_id: i64,
    meaning_id: i64,
    text: String,
}

impl JpnIndex {
    pub fn new(sentence_id: i64, meaning_id: i64, text: &str) -> Self {
        JpnIndex {
            sentence_id,
            meaning_id,
            text: text.to_string(),
        }
    }

    pub fn sentence_id(&self) -> i64 {
        self.sentence_id
    }

    pub fn meaning_id(&self) -> i64 {
        self.meaning_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl FromRow for JpnIndex {
    const FIELDS: &'static [&'static str] = &["sentence_id", "meaning_id", "text"];

    fn from_row(mut row: Row) -> Result<Self, Error> {
        Ok(JpnIndex {
            sentence_id: row.parse(0, Self::FIELDS[0])?,
            meaning_id: row.parse(1, Self::FIELDS[1])?,
            text: row.take(2, Self::FIELDS[2])?,
        })
    }
}

/// The Japanese indices table. There is a single slice of it, under
/// the `jpn` qualifier.
pub struct JpnIndices {
    file: Datafile,
}

impl JpnIndices {
    pub fn new(root: &Path) -> Self {
        Self::with_lookup(root, Arc::new(VersionFile::new(root)))
    }

    pub fn with_lookup(root: &Path, lookup: Arc<dyn VersionLookup>) -> Self {
        JpnIndices {
            file: Datafile::new(root, TableKind::JpnIndices, "jpn", lookup),
        }
    }
}

impl Table for JpnIndices {
    type Record = JpnIndex;

    fn kind(&self) -> TableKind {
        TableKind::JpnIndices
    }

    fn filename(&self) -> &str {
        self.file.filename()
    }

    fn path(&self) -> &Path {
        self.file.path()
    }

    fn records(&self) -> Records<JpnIndex> {
        self.file.records()
    }

    fn version(&self) -> Option<&Version> {
        self.file.version()
    }
}
