// src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures of the header-removal run.
#[derive(Debug, Error)]
pub enum StripError {
    /// The first scan found nothing to process. Raised before any file is touched.
    #[error("No CSV files have been found.")]
    NoInput,

    #[error("failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to create archive directory {path}: {source}")]
    ArchiveDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures of the forecast lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("API_KEY is not set; export it or add it to a .env file")]
    MissingApiKey,

    #[error("invalid forecast endpoint {url}: {source}")]
    Endpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("No location given")]
    MissingLocation,

    #[error("forecast request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("No data provided")]
    NoData,
}

impl From<reqwest::Error> for WeatherError {
    // request errors carry the full URL, query string (and API key) included
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Http(err.without_url())
    }
}
