//! Error enum
#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Io(std::io::Error),
    UnknownLang(String),
    UnknownTable(String),
    MalformedRow(String),
    Custom(String),
    Serde(serde_json::Error),
    Download(reqwest::Error),
    Url(url::ParseError),
}

impl From<reqwest::Error> for Error {
    fn from(v: reqwest::Error) -> Self {
        Self::Download(v)
    }
}

impl From<url::ParseError> for Error {
    fn from(v: url::ParseError) -> Self {
        Self::Url(v)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
