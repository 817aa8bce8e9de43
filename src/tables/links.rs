//! Links between sentences and their translations.
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use super::{Datafile, FromRow, Records, Row, Table, TableKind};
use crate::error::Error;
use crate::version::{Version, VersionFile, VersionLookup};

/// One direct translation relation between two sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    sentence_id: u32,
    translation_id: u32,
}

impl Link {
    pub fn new(sentence_id: u32, translation_id: u32) -> Self {
        Link {
            sentence_id,
            translation_id,
        }
    }

    pub fn sentence_id(&self) -> u32 {
        self.sentence_id
    }

    pub fn translation_id(&self) -> u32 {
        self.translation_id
    }
}

impl FromRow for Link {
    const FIELDS: &'static [&'static str] = &["sentence_id", "translation_id"];

    fn from_row(row: Row) -> Result<Self, Error> {
        Ok(Link {
            sentence_id: row.parse(0, Self::FIELDS[0])?,
            translation_id: row.parse(1, Self::FIELDS[1])?,
        })
    }
}

/// The links table for one ordered language pair.
pub struct Links {
    src_lang: String,
    tgt_lang: String,
    file: Datafile,
}

impl Links {
    /// Links from `src_lang` sentences to their `tgt_lang`
    /// translations, with stamps read from the registry at `root`.
    pub fn new(root: &Path, src_lang: &str, tgt_lang: &str) -> Self {
        Self::with_lookup(root, src_lang, tgt_lang, Arc::new(VersionFile::new(root)))
    }

    pub fn with_lookup(
        root: &Path,
        src_lang: &str,
        tgt_lang: &str,
        lookup: Arc<dyn VersionLookup>,
    ) -> Self {
        let qualifier = format!("{}-{}", src_lang, tgt_lang);
        Links {
            src_lang: src_lang.to_string(),
            tgt_lang: tgt_lang.to_string(),
            file: Datafile::new(root, TableKind::Links, &qualifier, lookup),
        }
    }

    pub fn src_lang(&self) -> &str {
        &self.src_lang
    }

    pub fn tgt_lang(&self) -> &str {
        &self.tgt_lang
    }

    /// Collects the distinct ids on each side of the table.
    ///
    /// Rows that do not parse are skipped with a warning.
    pub fn ids(&self) -> (HashSet<u32>, HashSet<u32>) {
        let mut sentences = HashSet::new();
        let mut translations = HashSet::new();
        for record in self.records() {
            match record {
                Ok(link) => {
                    sentences.insert(link.sentence_id());
                    translations.insert(link.translation_id());
                }
                Err(e) => warn!("{}: skipping bad row: {:?}", self.kind(), e),
            }
        }
        (sentences, translations)
    }
}

impl Table for Links {
    type Record = Link;

    fn kind(&self) -> TableKind {
        TableKind::Links
    }

    fn filename(&self) -> &str {
        self.file.filename()
    }

    fn path(&self) -> &Path {
        self.file.path()
    }

    fn records(&self) -> Records<Link> {
        self.file.records()
    }

    fn version(&self) -> Option<&Version> {
        self.file.version()
    }
}
