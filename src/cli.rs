//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "shelob", about = "parallel corpus construction tool.")]
/// Holds every command that is callable by the `shelob` command.
pub enum Shelob {
    #[structopt(about = "Fetch fresh table datafiles")]
    Update(Update),
    #[structopt(about = "Stream the aligned sentence pairs of a language pair")]
    Pairs(Pairs),
}

#[derive(Debug, StructOpt)]
/// Update command and parameters.
///
/// ```sh
/// shelob-update 0.1.0
/// Fetch fresh table datafiles
///
/// USAGE:
///     shelob update [FLAGS] [OPTIONS] [langs]...
///
/// FLAGS:
///     -h, --help       Prints help information
///     -q, --quiet      do not log per-file progress
///     -V, --version    Prints version information
///
/// OPTIONS:
///         --root <root>           data directory [default: data]
///     -t, --table <tables>...     tables to fetch
///
/// ARGS:
///     <langs>...    ISO 639-3 codes of the languages to fetch
/// ```
pub struct Update {
    #[structopt(help = "ISO 639-3 codes of the languages to fetch")]
    pub langs: Vec<String>,
    #[structopt(
        parse(from_os_str),
        long = "root",
        default_value = "data",
        help = "data directory"
    )]
    pub root: PathBuf,
    #[structopt(
        short = "t",
        long = "table",
        help = "tables to fetch (default: sentences_detailed and links)"
    )]
    pub tables: Vec<String>,
    #[structopt(short = "q", long = "quiet", help = "do not log per-file progress")]
    pub quiet: bool,
}

#[derive(Debug, StructOpt)]
/// Pairs command and parameters.
///
/// Writes one `src_id, src_text, tgt_id, tgt_text` TSV row per
/// aligned pair to stdout.
pub struct Pairs {
    #[structopt(help = "source language code")]
    pub src_lang: String,
    #[structopt(help = "target language code")]
    pub tgt_lang: String,
    #[structopt(
        parse(from_os_str),
        long = "root",
        default_value = "data",
        help = "data directory"
    )]
    pub root: PathBuf,
    #[structopt(short = "u", long = "update", help = "fetch fresh datafiles first")]
    pub update: bool,
    #[structopt(short = "q", long = "quiet", help = "do not log loading progress")]
    pub quiet: bool,
}
