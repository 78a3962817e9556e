use thiserror::Error;

/// The single failure class of the listings pipeline. Connection errors,
/// timeouts and non-2xx statuses all collapse into it; callers treat any
/// error the same way they treat an empty result.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("listing fetch failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
