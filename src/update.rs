/*! Refreshing local datafiles from the upstream exports.

The export server lays per-language files out under
`exports/per_language/<lang>/`, with links filed under their source
language. Japanese indexing data sits directly under `exports/`.
!*/
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use lazy_static::lazy_static;
use log::{debug, error, info, warn};
use url::Url;

use crate::download::{Downloader, BASE_URL};
use crate::error::Error;
use crate::lang::LANG;
use crate::tables::TableKind;
use crate::version::{VersionFile, Versions};

lazy_static! {
    static ref EXPORTS: Url = Url::parse(BASE_URL).unwrap();
}

/// Refreshes local datafiles on request.
pub trait Updater {
    /// Fetches the given tables for the given languages.
    ///
    /// Best effort all the way down: failures are logged, never
    /// returned.
    fn update(&self, tables: &BTreeSet<TableKind>, langs: &BTreeSet<String>, verbose: bool);
}

/// The updater backed by the Tatoeba export server.
pub struct Tatoeba {
    root: PathBuf,
    registry: VersionFile,
    downloader: Downloader,
}

impl Tatoeba {
    pub fn new(root: &Path) -> Self {
        Tatoeba {
            root: root.to_path_buf(),
            registry: VersionFile::new(root),
            downloader: Downloader::new(),
        }
    }

    /// Export files to fetch for one table, as
    /// `(qualifier, path on the export server)` pairs.
    ///
    /// Language codes outside [`LANG`] expand to nothing. Links need
    /// a source and a target, so they come out once per ordered pair
    /// of distinct languages.
    fn jobs(table: TableKind, langs: &BTreeSet<String>) -> Vec<(String, String)> {
        match table {
            TableKind::SentencesDetailed => langs
                .iter()
                .filter(|l| LANG.contains(l.as_str()))
                .map(|l| {
                    let path = format!("exports/per_language/{}/{}.gz", l, table.filename(l));
                    (l.clone(), path)
                })
                .collect(),
            TableKind::Links => langs
                .iter()
                .filter(|l| LANG.contains(l.as_str()))
                .permutations(2)
                .map(|pair| {
                    let qualifier = format!("{}-{}", pair[0], pair[1]);
                    let path = format!(
                        "exports/per_language/{}/{}.gz",
                        pair[0],
                        table.filename(&qualifier)
                    );
                    (qualifier, path)
                })
                .collect(),
            TableKind::JpnIndices => {
                vec![("jpn".to_string(), format!("exports/{}.gz", table.filename("jpn")))]
            }
        }
    }

    fn fetch_job(
        &self,
        table: TableKind,
        qualifier: &str,
        export_path: &str,
        versions: &mut Versions,
    ) -> Result<(), Error> {
        let url = EXPORTS.join(export_path)?;
        let filename = table.filename(qualifier);
        let dst = table.dir(&self.root).join(&filename);
        let version = self.downloader.fetch(&url, &dst)?;
        versions.set(&filename, version);
        Ok(())
    }
}

impl Updater for Tatoeba {
    fn update(&self, tables: &BTreeSet<TableKind>, langs: &BTreeSet<String>, verbose: bool) {
        if tables.is_empty() {
            debug!("local data already covers the request, nothing to fetch");
            return;
        }
        for lang in langs {
            if !LANG.contains(lang.as_str()) {
                warn!("unknown language code '{}', skipping", lang);
            }
        }
        let mut versions = self.registry.open();
        let mut fetched = 0usize;
        for table in tables {
            for (qualifier, export_path) in Self::jobs(*table, langs) {
                if verbose {
                    info!("fetching {}", table.filename(&qualifier));
                }
                match self.fetch_job(*table, &qualifier, &export_path, &mut versions) {
                    Ok(()) => fetched += 1,
                    Err(e) => error!("could not fetch '{}': {:?}", table.filename(&qualifier), e),
                }
            }
        }
        if fetched > 0 {
            if let Err(e) = versions.save() {
                error!("could not save the version registry: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn exports_base_parses() {
        assert_eq!(EXPORTS.as_str(), "https://downloads.tatoeba.org/");
    }

    #[test]
    fn sentence_jobs_one_per_lang() {
        let jobs = Tatoeba::jobs(TableKind::SentencesDetailed, &langs(&["eng", "fra"]));
        assert_eq!(
            jobs,
            vec![
                (
                    "eng".to_string(),
                    "exports/per_language/eng/eng_sentences_detailed.tsv.gz".to_string()
                ),
                (
                    "fra".to_string(),
                    "exports/per_language/fra/fra_sentences_detailed.tsv.gz".to_string()
                ),
            ]
        );
    }

    #[test]
    fn link_jobs_cover_both_directions() {
        let jobs = Tatoeba::jobs(TableKind::Links, &langs(&["eng", "fra"]));
        let qualifiers: Vec<&str> = jobs.iter().map(|(q, _)| q.as_str()).collect();
        assert_eq!(qualifiers, vec!["eng-fra", "fra-eng"]);
        assert_eq!(jobs[0].1, "exports/per_language/eng/eng-fra_links.tsv.gz");
        assert_eq!(jobs[1].1, "exports/per_language/fra/fra-eng_links.tsv.gz");
    }

    #[test]
    fn unknown_langs_expand_to_nothing() {
        let jobs = Tatoeba::jobs(TableKind::SentencesDetailed, &langs(&["eng", "xx"]));
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].0, "eng");

        // links need two valid languages
        let jobs = Tatoeba::jobs(TableKind::Links, &langs(&["eng", "xx"]));
        assert!(jobs.is_empty());
    }

    #[test]
    fn jpn_indices_is_a_single_job() {
        let jobs = Tatoeba::jobs(TableKind::JpnIndices, &langs(&[]));
        assert_eq!(
            jobs,
            vec![(
                "jpn".to_string(),
                "exports/jpn_jpn_indices.tsv.gz".to_string()
            )]
        );
    }
}
