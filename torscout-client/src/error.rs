use thiserror::Error;

/// Maximum number of raw body bytes kept on a decode failure.
const BODY_SNIPPET_LEN: usize = 256;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("service returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response from {url}: {detail}")]
    Decode {
        url: String,
        detail: String,
        body: String,
    },
}

impl FetchError {
    pub(crate) fn decode(url: &str, detail: impl ToString, body: &str) -> Self {
        let mut snippet = body.to_string();
        if snippet.len() > BODY_SNIPPET_LEN {
            let mut cut = BODY_SNIPPET_LEN;
            while !snippet.is_char_boundary(cut) {
                cut -= 1;
            }
            snippet.truncate(cut);
        }
        FetchError::Decode {
            url: url.to_string(),
            detail: detail.to_string(),
            body: snippet,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
