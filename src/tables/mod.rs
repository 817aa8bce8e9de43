/*! Table datafiles.

Tatoeba ships its tables as TSV datafiles, one record per line.
Fields never hold a raw tab or newline: the upstream export prefixes
a backslash to any tab or backslash inside a field, and [`Row`]
undoes that when splitting.

Every table follows the same layout under a data root:
`<root>/<table>/<qualifier>_<table>.tsv`, where the qualifier names
the slice of data the file holds (a language code, a language pair).
[`Datafile`] bundles that layout with lazy access to the version
stamp the file was fetched under.
!*/
use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use log::{debug, warn};

use crate::error::Error;
use crate::version::{Version, VersionLookup};

mod jpn_indices;
mod links;
mod sentences;

pub use jpn_indices::JpnIndex;
pub use jpn_indices::JpnIndices;
pub use links::Link;
pub use links::Links;
pub use sentences::SentenceDetailed;
pub use sentences::SentencesDetailed;

/// The table a datafile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    SentencesDetailed,
    Links,
    JpnIndices,
}

impl TableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::SentencesDetailed => "sentences_detailed",
            TableKind::Links => "links",
            TableKind::JpnIndices => "jpn_indices",
        }
    }

    /// Datafile name for a given qualifier, `<qualifier>_<table>.tsv`.
    pub fn filename(&self, qualifier: &str) -> String {
        format!("{}_{}.tsv", qualifier, self.as_str())
    }

    /// Directory holding this table's datafiles under `root`.
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(self.as_str())
    }

    /// Full path of the datafile for `qualifier` under `root`.
    pub fn path(&self, root: &Path, qualifier: &str) -> PathBuf {
        self.dir(root).join(self.filename(qualifier))
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sentences_detailed" => Ok(TableKind::SentencesDetailed),
            "links" => Ok(TableKind::Links),
            "jpn_indices" => Ok(TableKind::JpnIndices),
            other => Err(Error::UnknownTable(other.to_string())),
        }
    }
}

/// One raw row, split on unescaped tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(Vec<String>);

impl Row {
    /// Splits a line on tabs, honoring backslash escapes.
    ///
    /// A backslash makes the next character literal whatever it is.
    /// A lone backslash at the end of the line is dropped.
    pub fn split(line: &str) -> Row {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        field.push(escaped);
                    }
                }
                '\t' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
        fields.push(field);
        Row(fields)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field at `idx`, if the row has one.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.0.get(idx).map(String::as_str)
    }

    /// Takes ownership of the field at `idx`.
    pub fn take(&mut self, idx: usize, name: &str) -> Result<String, Error> {
        if idx < self.0.len() {
            Ok(std::mem::take(&mut self.0[idx]))
        } else {
            Err(Error::MalformedRow(format!("missing field '{}'", name)))
        }
    }

    /// Parses the field at `idx`.
    pub fn parse<T>(&self, idx: usize, name: &str) -> Result<T, Error>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self
            .get(idx)
            .ok_or_else(|| Error::MalformedRow(format!("missing field '{}'", name)))?;
        raw.parse()
            .map_err(|e| Error::MalformedRow(format!("field '{}': {} ({:?})", name, e, raw)))
    }
}

/// Escapes a field for writing: tabs and backslashes get a
/// backslash prefix.
pub fn escape(field: &str) -> Cow<'_, str> {
    if field.bytes().any(|b| b == b'\t' || b == b'\\') {
        let mut out = String::with_capacity(field.len() + 2);
        for c in field.chars() {
            if c == '\t' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        Cow::Owned(out)
    } else {
        Cow::Borrowed(field)
    }
}

/// A record type that can be read out of a table row.
pub trait FromRow: Sized {
    /// Field names, in file order.
    const FIELDS: &'static [&'static str];

    fn from_row(row: Row) -> Result<Self, Error>;
}

/// Lazy iterator over the records of a datafile.
///
/// Rows that fail to parse come out as `Err` items so that callers
/// decide whether to skip or stop. Empty lines are skipped.
#[derive(Debug)]
pub struct Records<R> {
    lines: Option<Lines<BufReader<File>>>,
    marker: PhantomData<R>,
}

impl<R> Records<R> {
    pub(crate) fn from_file(file: File) -> Self {
        Records {
            lines: Some(BufReader::new(file).lines()),
            marker: PhantomData,
        }
    }

    /// An iterator over no records at all.
    pub(crate) fn empty() -> Self {
        Records {
            lines: None,
            marker: PhantomData,
        }
    }
}

impl<R: FromRow> Iterator for Records<R> {
    type Item = Result<R, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines.as_mut()?;
        loop {
            match lines.next()? {
                Ok(line) => {
                    if line.is_empty() {
                        continue;
                    }
                    return Some(R::from_row(Row::split(&line)));
                }
                Err(e) => return Some(Err(Error::Io(e))),
            }
        }
    }
}

/// Outcome of opening a datafile that is allowed to be absent.
#[derive(Debug)]
pub enum Opened {
    Present(File),
    Absent,
}

impl Opened {
    /// Opens `path` for reading. Any failure to open counts as
    /// absent data, there is no error path.
    pub fn from_path(path: &Path) -> Opened {
        match File::open(path) {
            Ok(f) => Opened::Present(f),
            Err(e) => {
                debug!("cannot open {:?}: {}", path, e);
                Opened::Absent
            }
        }
    }
}

/// A table datafile under a data root.
///
/// Knows its place on disk and resolves its version stamp at most
/// once, on first request.
pub(crate) struct Datafile {
    kind: TableKind,
    filename: String,
    path: PathBuf,
    lookup: Arc<dyn VersionLookup>,
    version: OnceLock<Option<Version>>,
}

impl Datafile {
    pub(crate) fn new(
        root: &Path,
        kind: TableKind,
        qualifier: &str,
        lookup: Arc<dyn VersionLookup>,
    ) -> Self {
        let filename = kind.filename(qualifier);
        let path = kind.dir(root).join(&filename);
        Datafile {
            kind,
            filename,
            path,
            lookup,
            version: OnceLock::new(),
        }
    }

    pub(crate) fn filename(&self) -> &str {
        &self.filename
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the datafile and hands back its records. Missing data
    /// reads as an empty table, with a warning.
    pub(crate) fn records<R: FromRow>(&self) -> Records<R> {
        match Opened::from_path(&self.path) {
            Opened::Present(f) => Records::from_file(f),
            Opened::Absent => {
                warn!("no data locally available for the '{}' table", self.kind);
                Records::empty()
            }
        }
    }

    pub(crate) fn version(&self) -> Option<&Version> {
        self.version
            .get_or_init(|| self.lookup.version_of(&self.filename))
            .as_ref()
    }
}

/// Common surface of all tables.
pub trait Table {
    type Record: FromRow;

    fn kind(&self) -> TableKind;

    /// Name of the backing datafile.
    fn filename(&self) -> &str;

    /// Where the backing datafile lives, whether or not it exists.
    fn path(&self) -> &Path;

    /// Opens a fresh pass over the records.
    fn records(&self) -> Records<Self::Record>;

    /// Version stamp of the local datafile, resolved lazily and at
    /// most once per table value.
    fn version(&self) -> Option<&Version>;
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io::Write;

    use super::*;

    struct NoVersions;

    impl VersionLookup for NoVersions {
        fn version_of(&self, _filename: &str) -> Option<Version> {
            None
        }
    }

    struct CountingLookup {
        calls: Cell<usize>,
    }

    impl VersionLookup for CountingLookup {
        fn version_of(&self, _filename: &str) -> Option<Version> {
            self.calls.set(self.calls.get() + 1);
            Some("2023-11-04 09:12:31".parse().unwrap())
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Pair {
        id: u32,
        text: String,
    }

    impl FromRow for Pair {
        const FIELDS: &'static [&'static str] = &["id", "text"];

        fn from_row(mut row: Row) -> Result<Self, Error> {
            Ok(Pair {
                id: row.parse(0, Self::FIELDS[0])?,
                text: row.take(1, Self::FIELDS[1])?,
            })
        }
    }

    #[test]
    fn split_plain() {
        let row = Row::split("1\tfoo\tbar");
        assert_eq!(row, Row(vec!["1".into(), "foo".into(), "bar".into()]));
    }

    #[test]
    fn split_escaped_tab() {
        // "a\<TAB>b" is one field holding a literal tab.
        let row = Row::split("a\\\tb\tc");
        assert_eq!(row, Row(vec!["a\tb".into(), "c".into()]));
    }

    #[test]
    fn split_escaped_backslash() {
        let row = Row::split("a\\\\b");
        assert_eq!(row, Row(vec!["a\\b".into()]));
    }

    #[test]
    fn split_escape_makes_any_char_literal() {
        let row = Row::split("\\n\t\\N");
        assert_eq!(row, Row(vec!["n".into(), "N".into()]));
    }

    #[test]
    fn split_trailing_backslash_dropped() {
        let row = Row::split("a\tb\\");
        assert_eq!(row, Row(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn split_empty_fields() {
        let row = Row::split("\t\t");
        assert_eq!(row, Row(vec!["".into(), "".into(), "".into()]));
    }

    #[test]
    fn escape_then_split_restores_field() {
        for field in ["plain", "tab\there", "back\\slash", "both\\\tat once"] {
            let escaped = escape(field);
            assert_eq!(Row::split(&escaped), Row(vec![field.to_string()]));
        }
    }

    #[test]
    fn escape_borrows_clean_fields() {
        assert!(matches!(escape("nothing to do"), Cow::Borrowed(_)));
        assert!(matches!(escape("tab\there"), Cow::Owned(_)));
    }

    #[test]
    fn table_filenames() {
        assert_eq!(
            TableKind::SentencesDetailed.filename("eng"),
            "eng_sentences_detailed.tsv"
        );
        assert_eq!(TableKind::Links.filename("eng-fra"), "eng-fra_links.tsv");
        assert_eq!(TableKind::JpnIndices.filename("jpn"), "jpn_jpn_indices.tsv");
    }

    #[test]
    fn table_paths() {
        let root = Path::new("data");
        assert_eq!(
            TableKind::Links.path(root, "eng-fra"),
            Path::new("data/links/eng-fra_links.tsv")
        );
    }

    #[test]
    fn table_kind_from_str() {
        assert_eq!(
            "sentences_detailed".parse::<TableKind>().unwrap(),
            TableKind::SentencesDetailed
        );
        assert!(matches!(
            "sentences".parse::<TableKind>(),
            Err(Error::UnknownTable(_))
        ));
    }

    #[test]
    fn opened_absent_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.tsv");
        assert!(matches!(Opened::from_path(&missing), Opened::Absent));
    }

    #[test]
    fn opened_present_on_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("here.tsv");
        std::fs::write(&path, "1\tfoo\n").unwrap();
        assert!(matches!(Opened::from_path(&path), Opened::Present(_)));
    }

    #[test]
    fn records_skip_empty_lines_and_surface_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.tsv");
        let mut f = File::create(&path).unwrap();
        write!(f, "1\tfoo\n\n2\tbar\nx\tbaz\n3\twith\\\ttab\n").unwrap();
        drop(f);

        let records: Vec<Result<Pair, Error>> =
            Records::from_file(File::open(&path).unwrap()).collect();
        assert_eq!(records.len(), 4);
        assert_eq!(
            records[0].as_ref().unwrap(),
            &Pair {
                id: 1,
                text: "foo".into()
            }
        );
        assert_eq!(records[1].as_ref().unwrap().id, 2);
        assert!(matches!(records[2], Err(Error::MalformedRow(_))));
        assert_eq!(records[3].as_ref().unwrap().text, "with\ttab");
    }

    #[test]
    fn datafile_reads_absent_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = Datafile::new(
            dir.path(),
            TableKind::SentencesDetailed,
            "eng",
            Arc::new(NoVersions),
        );
        assert_eq!(file.records::<Pair>().count(), 0);
    }

    #[test]
    fn datafile_version_resolved_once() {
        let lookup = Arc::new(CountingLookup {
            calls: Cell::new(0),
        });
        let file = Datafile::new(
            Path::new("data"),
            TableKind::Links,
            "eng-fra",
            lookup.clone(),
        );
        assert!(file.version().is_some());
        assert!(file.version().is_some());
        assert_eq!(lookup.calls.get(), 1);
    }
}
