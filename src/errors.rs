use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid range: low ({low}) is greater than high ({high})")]
    InvalidRange { low: u32, high: u32 },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("http client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("url parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Classify a failed request, timeouts get their own variant.
    pub(crate) fn from_request(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout { url: url.into() }
        } else {
            Error::Network {
                url: url.into(),
                source: err,
            }
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
