use thiserror::Error;

/// Validation outcome for the url form. Surfaced synchronously, never
/// reaches `loading_process`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    NotUrl,
    Exists,
}

impl FormError {
    /// Catalog key under `errors.`.
    pub fn key(self) -> &'static str {
        match self {
            Self::NotUrl => "notURL",
            Self::Exists => "exists",
        }
    }
}

/// User-visible classification of an ingestion failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadError {
    NotRss,
    Network,
    Unknown,
}

impl LoadError {
    /// Catalog key under `errors.`.
    pub fn key(self) -> &'static str {
        match self {
            Self::NotRss => "notRSS",
            Self::Network => "network",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Error, Debug)]
#[error("not a valid feed document: {0}")]
pub struct ParsingError(#[from] pub feed_rs::parser::ParseFeedError);

/// Everything that can go wrong between submitting a url and merging its
/// posts. Internal to the pipeline; the ui only ever sees a [`LoadError`].
#[derive(Error, Debug)]
pub enum IngestError {
    #[error(transparent)]
    Parse(#[from] ParsingError),
    #[error("transport failure: {0}")]
    Http(#[from] reqwest::Error),
    #[error("bad proxy address: {0}")]
    Address(#[from] url::ParseError),
    #[error("undecodable proxy envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}
