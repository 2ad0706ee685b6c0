use thiserror::Error;

/// Failures surfaced by the locator and extractor.
///
/// Callers match on the variant: a `Transport` error with a 404 status is the
/// signal to fall back from a guessed path to live discovery.
#[derive(Error, Debug)]
pub enum StatError {
    #[error("Failed to fetch from {url}: {message}")]
    Transport {
        url: String,
        status: Option<u16>,
        message: String,
    },

    #[error("No entries found in directory listing: {0}")]
    Discovery(String),

    #[error("No stat file at index {index} ({available} candidates available)")]
    Index { index: usize, available: usize },

    #[error("Failed to parse a rating from file name: {0}")]
    Parse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to read stat file: {0}")]
    Io(#[from] std::io::Error),
}

impl StatError {
    pub fn transport(url: &str, status: Option<u16>, message: impl Into<String>) -> Self {
        StatError::Transport {
            url: url.to_string(),
            status,
            message: message.into(),
        }
    }

    /// True when the server answered, but with 404 Not Found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StatError::Transport { status: Some(404), .. })
    }
}

pub type StatResult<T> = Result<T, StatError>;
