/*! Parallel corpus alignment.

Aligns the sentences of one language with their translations in
another by replaying the links table of the pair against the two
sentence datafiles.
!*/
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{error, warn};

use crate::tables::{Link, Links, Records, SentenceDetailed, SentencesDetailed, Table, TableKind};
use crate::update::{Tatoeba, Updater};
use crate::version::{VersionFile, VersionLookup};

/// Readiness of the local data behind a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusState {
    /// Every datafile is stamped and the stamps agree.
    Ready,
    /// At least one datafile has no version stamp.
    MissingData,
    /// All stamps present but not from the same daily export.
    VersionMismatch,
}

/// Sentence pairs for one ordered language pair.
///
/// Construction refreshes whatever local data is missing (or
/// everything, when `update` is set), then loads the two
/// id-to-sentence maps that iteration joins against. A corpus whose
/// data cannot be loaded is empty rather than an error.
pub struct ParallelCorpus {
    root: PathBuf,
    src_lang: String,
    tgt_lang: String,
    verbose: bool,
    lookup: Arc<dyn VersionLookup>,
    state: CorpusState,
    sentences: HashMap<u32, SentenceDetailed>,
    translations: HashMap<u32, SentenceDetailed>,
}

impl ParallelCorpus {
    /// Builds the corpus for `src_lang`-`tgt_lang` over the data
    /// directory at `root`, refreshing datafiles through [`Tatoeba`].
    pub fn new(root: &Path, src_lang: &str, tgt_lang: &str, update: bool, verbose: bool) -> Self {
        Self::new_with(
            root,
            src_lang,
            tgt_lang,
            update,
            verbose,
            Arc::new(VersionFile::new(root)),
            &Tatoeba::new(root),
        )
    }

    /// Same as [`ParallelCorpus::new`], with the version lookup and
    /// the update coordinator picked by the caller.
    pub fn new_with(
        root: &Path,
        src_lang: &str,
        tgt_lang: &str,
        update: bool,
        verbose: bool,
        lookup: Arc<dyn VersionLookup>,
        updater: &dyn Updater,
    ) -> Self {
        let mut corpus = ParallelCorpus {
            root: root.to_path_buf(),
            src_lang: src_lang.to_string(),
            tgt_lang: tgt_lang.to_string(),
            verbose,
            lookup,
            state: CorpusState::MissingData,
            sentences: HashMap::new(),
            translations: HashMap::new(),
        };
        let (tables, langs) = corpus.refresh_plan(update);
        // The refresh stays quiet whatever `verbose` says; progress
        // lines belong to explicit update runs.
        updater.update(&tables, &langs, false);
        corpus.load();
        corpus
    }

    pub fn source_lang(&self) -> &str {
        &self.src_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.tgt_lang
    }

    /// Readiness the corpus settled into at construction.
    pub fn state(&self) -> CorpusState {
        self.state
    }

    /// What an update pass needs to fetch: every table the corpus
    /// relies on when `update` is set, otherwise only those with no
    /// local version stamp.
    fn refresh_plan(&self, update: bool) -> (BTreeSet<TableKind>, BTreeSet<String>) {
        let mut tables = BTreeSet::new();
        let mut langs = BTreeSet::new();
        if update {
            tables.insert(TableKind::SentencesDetailed);
            tables.insert(TableKind::Links);
            langs.insert(self.src_lang.clone());
            langs.insert(self.tgt_lang.clone());
            return (tables, langs);
        }
        if self.sentence_table(&self.src_lang).version().is_none() {
            tables.insert(TableKind::SentencesDetailed);
            langs.insert(self.src_lang.clone());
        }
        if self.sentence_table(&self.tgt_lang).version().is_none() {
            tables.insert(TableKind::SentencesDetailed);
            langs.insert(self.tgt_lang.clone());
        }
        if self.link_table().version().is_none() {
            tables.insert(TableKind::Links);
            langs.insert(self.src_lang.clone());
            langs.insert(self.tgt_lang.clone());
        }
        (tables, langs)
    }

    fn link_table(&self) -> Links {
        Links::with_lookup(
            &self.root,
            &self.src_lang,
            &self.tgt_lang,
            Arc::clone(&self.lookup),
        )
    }

    fn sentence_table(&self, lang: &str) -> SentencesDetailed {
        SentencesDetailed::with_lookup(&self.root, lang, Arc::clone(&self.lookup))
    }

    /// Checks that the three datafiles are stamped and come from the
    /// same daily export, then loads the sentences the links refer
    /// to. On any other outcome the corpus stays empty.
    fn load(&mut self) {
        let links = self.link_table();
        let sources = self.sentence_table(&self.src_lang);
        let targets = self.sentence_table(&self.tgt_lang);

        match (links.version(), sources.version(), targets.version()) {
            (Some(links_v), Some(sources_v), Some(targets_v)) => {
                if links_v.same_date(sources_v) && links_v.same_date(targets_v) {
                    let (src_ids, tgt_ids) = links.ids();
                    self.sentences = sources.get(&src_ids, self.verbose);
                    self.translations = targets.get(&tgt_ids, self.verbose);
                    self.state = CorpusState::Ready;
                } else {
                    error!(
                        "{}-{}: datafile versions differ. please update your data.",
                        self.src_lang, self.tgt_lang
                    );
                    self.state = CorpusState::VersionMismatch;
                }
            }
            _ => {
                error!(
                    "{}-{}: missing data file(s). please update your data.",
                    self.src_lang, self.tgt_lang
                );
                self.state = CorpusState::MissingData;
            }
        }
    }

    /// Starts a fresh pass over the aligned pairs.
    ///
    /// Every pass replays the links datafile. Nothing is read until
    /// the iterator is driven, and dropping it mid-way closes the
    /// file.
    pub fn pairs(&self) -> Pairs<'_> {
        let links = if self.sentences.is_empty() || self.translations.is_empty() {
            Records::empty()
        } else {
            self.link_table().records()
        };
        Pairs {
            links,
            sentences: &self.sentences,
            translations: &self.translations,
        }
    }
}

impl<'a> IntoIterator for &'a ParallelCorpus {
    type Item = (&'a SentenceDetailed, &'a SentenceDetailed);
    type IntoIter = Pairs<'a>;

    fn into_iter(self) -> Pairs<'a> {
        self.pairs()
    }
}

/// Iterator over aligned sentence pairs, in links-file order.
#[derive(Debug)]
pub struct Pairs<'a> {
    links: Records<Link>,
    sentences: &'a HashMap<u32, SentenceDetailed>,
    translations: &'a HashMap<u32, SentenceDetailed>,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a SentenceDetailed, &'a SentenceDetailed);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.links.next()? {
                Ok(link) => {
                    let found = (
                        self.sentences.get(&link.sentence_id()),
                        self.translations.get(&link.translation_id()),
                    );
                    match found {
                        (Some(sentence), Some(translation)) => {
                            return Some((sentence, translation))
                        }
                        _ => warn!(
                            "link {}-{} points outside the loaded sentences, skipping",
                            link.sentence_id(),
                            link.translation_id()
                        ),
                    }
                }
                Err(e) => warn!("skipping bad link row: {:?}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::version::Version;

    struct FakeRegistry {
        stamps: HashMap<String, Version>,
    }

    impl FakeRegistry {
        fn new(entries: &[(&str, &str)]) -> Arc<Self> {
            let stamps = entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.parse().unwrap()))
                .collect();
            Arc::new(FakeRegistry { stamps })
        }
    }

    impl VersionLookup for FakeRegistry {
        fn version_of(&self, filename: &str) -> Option<Version> {
            self.stamps.get(filename).copied()
        }
    }

    #[derive(Default)]
    struct RecordingUpdater {
        calls: RefCell<Vec<(BTreeSet<TableKind>, BTreeSet<String>, bool)>>,
    }

    impl Updater for RecordingUpdater {
        fn update(&self, tables: &BTreeSet<TableKind>, langs: &BTreeSet<String>, verbose: bool) {
            self.calls
                .borrow_mut()
                .push((tables.clone(), langs.clone(), verbose));
        }
    }

    fn langs(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    fn tables(kinds: &[TableKind]) -> BTreeSet<TableKind> {
        kinds.iter().copied().collect()
    }

    #[test]
    fn forced_update_requests_everything() {
        let updater = RecordingUpdater::default();
        let root = tempfile::tempdir().unwrap();
        let _ = ParallelCorpus::new_with(
            root.path(),
            "eng",
            "fra",
            true,
            false,
            FakeRegistry::new(&[]),
            &updater,
        );

        let calls = updater.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (t, l, verbose) = &calls[0];
        assert_eq!(
            *t,
            tables(&[TableKind::SentencesDetailed, TableKind::Links])
        );
        assert_eq!(*l, langs(&["eng", "fra"]));
        assert!(!*verbose);
    }

    #[test]
    fn unstamped_data_requests_everything_missing() {
        let updater = RecordingUpdater::default();
        let root = tempfile::tempdir().unwrap();
        let corpus = ParallelCorpus::new_with(
            root.path(),
            "eng",
            "fra",
            false,
            false,
            FakeRegistry::new(&[]),
            &updater,
        );

        assert_eq!(corpus.state(), CorpusState::MissingData);
        let calls = updater.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].0,
            tables(&[TableKind::SentencesDetailed, TableKind::Links])
        );
        assert_eq!(calls[0].1, langs(&["eng", "fra"]));
    }

    #[test]
    fn stamped_data_requests_nothing() {
        let updater = RecordingUpdater::default();
        let root = tempfile::tempdir().unwrap();
        let corpus = ParallelCorpus::new_with(
            root.path(),
            "eng",
            "fra",
            false,
            false,
            FakeRegistry::new(&[
                ("eng_sentences_detailed.tsv", "2023-11-04 09:00:00"),
                ("fra_sentences_detailed.tsv", "2023-11-04 09:05:00"),
                ("eng-fra_links.tsv", "2023-11-04 09:10:00"),
            ]),
            &updater,
        );

        let calls = updater.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.is_empty());
        assert!(calls[0].1.is_empty());
        // stamps agree on the date, so the corpus counts as ready
        // even though its datafiles are empty
        assert_eq!(corpus.state(), CorpusState::Ready);
        assert_eq!(corpus.pairs().count(), 0);
    }

    #[test]
    fn missing_link_stamp_requests_links_for_both_langs() {
        let updater = RecordingUpdater::default();
        let root = tempfile::tempdir().unwrap();
        let corpus = ParallelCorpus::new_with(
            root.path(),
            "eng",
            "fra",
            false,
            false,
            FakeRegistry::new(&[
                ("eng_sentences_detailed.tsv", "2023-11-04 09:00:00"),
                ("fra_sentences_detailed.tsv", "2023-11-04 09:05:00"),
            ]),
            &updater,
        );

        let calls = updater.calls.borrow();
        assert_eq!(calls[0].0, tables(&[TableKind::Links]));
        assert_eq!(calls[0].1, langs(&["eng", "fra"]));
        assert_eq!(corpus.state(), CorpusState::MissingData);
    }

    #[test]
    fn differing_dates_leave_the_corpus_empty() {
        let updater = RecordingUpdater::default();
        let root = tempfile::tempdir().unwrap();
        let corpus = ParallelCorpus::new_with(
            root.path(),
            "eng",
            "fra",
            false,
            false,
            FakeRegistry::new(&[
                ("eng_sentences_detailed.tsv", "2023-11-03 09:00:00"),
                ("fra_sentences_detailed.tsv", "2023-11-04 09:05:00"),
                ("eng-fra_links.tsv", "2023-11-04 09:10:00"),
            ]),
            &updater,
        );

        assert_eq!(corpus.state(), CorpusState::VersionMismatch);
        assert_eq!(corpus.pairs().count(), 0);
    }
}
