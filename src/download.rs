/*! Download support for the export server.

Exports come down gzipped. [`Downloader::fetch`] decompresses on the
fly and stamps each file with the export date the server advertises.
!*/
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::DateTime;
use flate2::read::MultiGzDecoder;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, LAST_MODIFIED};
use url::Url;

use crate::error::Error;
use crate::version::Version;

pub(crate) const BASE_URL: &str = "https://downloads.tatoeba.org/";

/// Blocking download client for the export server.
pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new() -> Self {
        Downloader {
            client: Client::new(),
        }
    }

    /// Fetches a gzipped export into `dst`, decompressed.
    ///
    /// The version stamp comes from the `Last-Modified` header; a
    /// server that does not send one gets the fetch time instead.
    pub fn fetch(&self, url: &Url, dst: &Path) -> Result<Version, Error> {
        debug!("downloading {}", url);
        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        let version = version_from_headers(response.headers()).unwrap_or_else(Version::now);
        gunzip_to(response, dst)?;
        Ok(version)
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

fn version_from_headers(headers: &HeaderMap) -> Option<Version> {
    let raw = headers.get(LAST_MODIFIED)?.to_str().ok()?;
    let parsed = DateTime::parse_from_rfc2822(raw).ok()?;
    Some(Version::new(parsed.naive_utc()))
}

/// Decompresses a gzip stream into `dst` through a `.part` file,
/// renamed into place once the stream ends cleanly. A stream that
/// fails mid-way leaves nothing behind.
fn gunzip_to<R: Read>(reader: R, dst: &Path) -> Result<(), Error> {
    if let Some(parent) = dst.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let part = dst.with_extension("part");
    let mut gz = MultiGzDecoder::new(BufReader::new(reader));
    let mut out = File::create(&part)?;
    if let Err(e) = std::io::copy(&mut gz, &mut out) {
        drop(out);
        let _ = std::fs::remove_file(&part);
        return Err(e.into());
    }
    std::fs::rename(&part, dst)?;
    Ok(())
}
