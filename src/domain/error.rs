use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The server answered with a status outside of `[200, 300)`.
    #[error("{0}")]
    RequestFailed(String),

    /// The request could not be sent or no response was read back.
    #[error("{0}")]
    Transport(String),

    #[error("Invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The blocking runtime or the http client could not be built.
    #[error("{0}")]
    Runtime(String),

    /// The blocking call itself did not complete.
    #[error("Blocking call failed: {0}")]
    Blocking(String),
}

impl RequestError {
    pub fn request_failed(status_text: &str) -> Self {
        Self::RequestFailed(status_text.to_string())
    }

    pub fn transport(description: &str) -> Self {
        Self::Transport(description.to_string())
    }

    pub fn invalid_url(url: &str, reason: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Body text on success, the reason it failed otherwise.
pub type RequestOutcome = Result<String, RequestError>;
