use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort the whole run. Row- and field-level gaps never
/// end up here; they leave empty fields in the record instead.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("can't read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("can't parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    ConfigInvalid(String),
    #[error("can't build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
    #[error("can't fetch http content from page {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },
    #[error("page {url} answered with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("can't parse html document: {0}")]
    Parse(String),
    #[error("can't create file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("can't write products to {path}: {source}")]
    FileWrite { path: PathBuf, source: csv::Error },
}

pub type Result<T> = std::result::Result<T, CrawlError>;
