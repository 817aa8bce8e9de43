/*! Datafile version registry.

Each fetched datafile is stamped with the date and time of the
upstream export it came from. Stamps live in a single `versions.json`
at the root of the data directory and are read back lazily when
tables need them.
!*/
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Timelike, Utc};
use log::warn;

use crate::error::Error;

pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const REGISTRY_FILENAME: &str = "versions.json";

/// Version stamp of a single datafile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version(NaiveDateTime);

impl Version {
    pub fn new(stamp: NaiveDateTime) -> Self {
        Version(stamp)
    }

    /// Stamp for a fetch whose upstream export date is unknown.
    pub fn now() -> Self {
        let now = Utc::now().naive_utc();
        Version(now.with_nanosecond(0).unwrap_or(now))
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Two datafiles belong to the same export when their stamps
    /// share a calendar date, whatever the time of day.
    pub fn same_date(&self, other: &Version) -> bool {
        self.date() == other.date()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

impl FromStr for Version {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Version(NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)?))
    }
}

/// Read access to version stamps.
///
/// Tables take this as a trait object so that tests can supply
/// stamps without touching the filesystem.
pub trait VersionLookup {
    /// Version under which `filename` was last fetched, if known.
    fn version_of(&self, filename: &str) -> Option<Version>;
}

/// Handle on the on-disk registry.
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(root: &Path) -> Self {
        VersionFile {
            path: root.join(REGISTRY_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the registry.
    ///
    /// A registry that is missing or unreadable opens as an empty
    /// one, so callers always get something they can query and
    /// write back.
    pub fn open(&self) -> Versions {
        let entries = match File::open(&self.path) {
            Ok(f) => match serde_json::from_reader(BufReader::new(f)) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("unreadable version registry at {:?}: {}", self.path, e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!("cannot open version registry at {:?}: {}", self.path, e);
                HashMap::new()
            }
        };
        Versions {
            entries,
            path: self.path.clone(),
        }
    }
}

impl VersionLookup for VersionFile {
    fn version_of(&self, filename: &str) -> Option<Version> {
        self.open().get(filename)
    }
}

/// In-memory registry contents, tied to the path they came from.
///
/// Stamps are kept as strings so that one bad entry does not take
/// the rest of the registry down with it.
#[derive(Debug)]
pub struct Versions {
    entries: HashMap<String, String>,
    path: PathBuf,
}

impl Versions {
    pub fn get(&self, filename: &str) -> Option<Version> {
        let raw = self.entries.get(filename)?;
        match raw.parse() {
            Ok(version) => Some(version),
            Err(e) => {
                warn!("bad version stamp for '{}': {}", filename, e);
                None
            }
        }
    }

    pub fn set(&mut self, filename: &str, version: Version) {
        self.entries.insert(filename.to_string(), version.to_string());
    }

    pub fn save(&self) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let f = File::create(&self.path)?;
        serde_json::to_writer_pretty(f, &self.entries)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_roundtrip() {
        let v: Version = "2023-11-04 09:12:31".parse().unwrap();
        assert_eq!(v.to_string(), "2023-11-04 09:12:31");
    }

    #[test]
    fn version_same_date() {
        let morning: Version = "2023-11-04 06:00:00".parse().unwrap();
        let evening: Version = "2023-11-04 22:30:00".parse().unwrap();
        let next_day: Version = "2023-11-05 06:00:00".parse().unwrap();
        assert!(morning.same_date(&evening));
        assert!(!morning.same_date(&next_day));
    }

    #[test]
    fn now_has_no_subsecond_part() {
        assert_eq!(Version::now().0.nanosecond(), 0);
    }

    #[test]
    fn missing_registry_opens_empty() {
        let root = tempfile::tempdir().unwrap();
        let registry = VersionFile::new(root.path());
        assert_eq!(registry.open().get("eng_sentences_detailed.tsv"), None);
    }

    #[test]
    fn set_save_reopen() {
        let root = tempfile::tempdir().unwrap();
        let registry = VersionFile::new(root.path());
        let stamp: Version = "2023-11-04 09:12:31".parse().unwrap();

        let mut versions = registry.open();
        versions.set("eng-fra_links.tsv", stamp);
        versions.save().unwrap();

        assert_eq!(registry.version_of("eng-fra_links.tsv"), Some(stamp));
        assert_eq!(registry.version_of("fra_sentences_detailed.tsv"), None);
    }

    #[test]
    fn bad_stamp_yields_none() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join("versions.json"),
            r#"{"eng_sentences_detailed.tsv": "not a date", "eng-fra_links.tsv": "2023-11-04 09:12:31"}"#,
        )
        .unwrap();
        let registry = VersionFile::new(root.path());
        assert_eq!(registry.version_of("eng_sentences_detailed.tsv"), None);
        assert!(registry.version_of("eng-fra_links.tsv").is_some());
    }

    #[test]
    fn corrupt_registry_opens_empty() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("versions.json"), "{ nope").unwrap();
        let registry = VersionFile::new(root.path());
        assert_eq!(registry.version_of("jpn_jpn_indices.tsv"), None);
    }
}
