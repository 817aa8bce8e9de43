//! # Shelob
//!
//! 🕷️ Shelob builds parallel corpora from the Tatoeba sentence exports.
//!
//! It keeps a local directory of table datafiles, refreshes them from
//! the export server when they are missing or on request, and streams
//! the aligned sentence pairs of a language pair.
//!
//! ## Getting started
//!
//! ```sh
//! shelob 0.1.0
//! parallel corpus construction tool.
//!
//! USAGE:
//!     shelob <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help      Prints this message or the help of the given subcommand(s)
//!     pairs     Stream the aligned sentence pairs of a language pair
//!     update    Fetch fresh table datafiles
//! ```
//!
use std::collections::BTreeSet;
use std::io::Write;

use structopt::StructOpt;

#[macro_use]
extern crate log;

use shelob::corpus::ParallelCorpus;
use shelob::error::Error;
use shelob::lang::LANG;
use shelob::tables::{escape, TableKind};
use shelob::update::{Tatoeba, Updater};

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Shelob::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Shelob::Update(u) => update(u),
        cli::Shelob::Pairs(p) => pairs(p),
    }
}

fn update(args: cli::Update) -> Result<(), Error> {
    let langs = checked_langs(&args.langs)?;
    let tables: BTreeSet<TableKind> = if args.tables.is_empty() {
        [TableKind::SentencesDetailed, TableKind::Links]
            .into_iter()
            .collect()
    } else {
        args.tables
            .iter()
            .map(|t| t.parse())
            .collect::<Result<_, _>>()?
    };
    Tatoeba::new(&args.root).update(&tables, &langs, !args.quiet);
    Ok(())
}

fn pairs(args: cli::Pairs) -> Result<(), Error> {
    checked_langs(&[args.src_lang.clone(), args.tgt_lang.clone()])?;
    let corpus = ParallelCorpus::new(
        &args.root,
        &args.src_lang,
        &args.tgt_lang,
        args.update,
        !args.quiet,
    );

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    for (sentence, translation) in &corpus {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            sentence.sentence_id(),
            escape(sentence.text()),
            translation.sentence_id(),
            escape(translation.text())
        )?;
    }
    out.flush()?;
    Ok(())
}

fn checked_langs(codes: &[String]) -> Result<BTreeSet<String>, Error> {
    let mut langs = BTreeSet::new();
    for code in codes {
        if !LANG.contains(code.as_str()) {
            return Err(Error::UnknownLang(code.clone()));
        }
        langs.insert(code.clone());
    }
    Ok(langs)
}
