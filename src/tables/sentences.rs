//! Sentences with their contribution metadata.
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDateTime;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::{Datafile, FromRow, Records, Row, Table, TableKind};
use crate::error::Error;
use crate::version::{Version, VersionFile, VersionLookup, DATE_TIME_FORMAT};

/// One sentence of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceDetailed {
    sentence_id: u32,
    lang: String,
    text: String,
    username: String,
    date_added: Option<NaiveDateTime>,
    date_modified: Option<NaiveDateTime>,
}

impl SentenceDetailed {
    pub fn new(
        sentence_id: u32,
        lang: &str,
        text: &str,
        username: &str,
        date_added: Option<NaiveDateTime>,
        date_modified: Option<NaiveDateTime>,
    ) -> Self {
        SentenceDetailed {
            sentence_id,
            lang: lang.to_string(),
            text: text.to_string(),
            username: username.to_string(),
            date_added,
            date_modified,
        }
    }

    pub fn sentence_id(&self) -> u32 {
        self.sentence_id
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date_added(&self) -> Option<&NaiveDateTime> {
        self.date_added.as_ref()
    }

    pub fn date_modified(&self) -> Option<&NaiveDateTime> {
        self.date_modified.as_ref()
    }
}

/// Dates are best effort: the export writes `\N` or `0000-00-00`
/// placeholders for unknown ones, and those read as no date.
fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT).ok()
}

impl FromRow for SentenceDetailed {
    const FIELDS: &'static [&'static str] = &[
        "sentence_id",
        "lang",
        "text",
        "username",
        "date_added",
        "date_modified",
    ];

    fn from_row(mut row: Row) -> Result<Self, Error> {
        Ok(SentenceDetailed {
            sentence_id: row.parse(0, Self::FIELDS[0])?,
            lang: row.take(1, Self::FIELDS[1])?,
            text: row.take(2, Self::FIELDS[2])?,
            username: row.take(3, Self::FIELDS[3])?,
            date_added: row.get(4).and_then(parse_date),
            date_modified: row.get(5).and_then(parse_date),
        })
    }
}

/// The detailed sentences table for one language.
pub struct SentencesDetailed {
    lang: String,
    file: Datafile,
}

impl SentencesDetailed {
    pub fn new(root: &Path, lang: &str) -> Self {
        Self::with_lookup(root, lang, Arc::new(VersionFile::new(root)))
    }

    pub fn with_lookup(root: &Path, lang: &str, lookup: Arc<dyn VersionLookup>) -> Self {
        SentencesDetailed {
            lang: lang.to_string(),
            file: Datafile::new(root, TableKind::SentencesDetailed, lang, lookup),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Maps the requested ids to their sentences, in a single pass
    /// over the datafile.
    ///
    /// Ids with no matching row are simply not in the result.
    /// `verbose` adds a progress line and nothing else.
    pub fn get(&self, ids: &HashSet<u32>, verbose: bool) -> HashMap<u32, SentenceDetailed> {
        if ids.is_empty() {
            return HashMap::new();
        }
        let mut found = HashMap::with_capacity(ids.len());
        for record in self.records() {
            match record {
                Ok(sentence) => {
                    if ids.contains(&sentence.sentence_id()) {
                        found.insert(sentence.sentence_id(), sentence);
                        if found.len() == ids.len() {
                            break;
                        }
                    }
                }
                Err(e) => warn!("{}: skipping bad row: {:?}", self.kind(), e),
            }
        }
        if verbose {
            info!(
                "{}: mapped {}/{} requested sentences",
                self.lang,
                found.len(),
                ids.len()
            );
        }
        found
    }
}

impl Table for SentencesDetailed {
    type Record = SentenceDetailed;

    fn kind(&self) -> TableKind {
        TableKind::SentencesDetailed
    }

    fn filename(&self) -> &str {
        self.file.filename()
    }

    fn path(&self) -> &Path {
        self.file.path()
    }

    fn records(&self) -> Records<SentenceDetailed> {
        self.file.records()
    }

    fn version(&self) -> Option<&Version> {
        self.file.version()
    }
}
