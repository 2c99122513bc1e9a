use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised locally by the client.
///
/// Remote failures are not part of this taxonomy: a non-2xx status is
/// returned inside [`crate::ApiResponse`] for the caller to inspect, never
/// as an `Err`. The only in-flight `Err` is [`Error::Transport`].
#[derive(Debug, Error)]
pub enum Error {
    /// No API key was supplied and the environment variable is unset or empty.
    #[error("no API key: pass one explicitly or set the {} environment variable", crate::client::API_KEY_ENV_VAR)]
    MissingApiKey,

    /// The API key cannot be used as an HTTP header value.
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// A required field on a write request was left unset.
    #[error("required field `{0}` is not set")]
    MissingField(&'static str),

    /// The request never produced a response (connect, DNS, timeout, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Checks a required write-side field before dispatch.
pub(crate) fn require<T>(value: &Option<T>, field: &'static str) -> Result<()> {
    match value {
        Some(_) => Ok(()),
        None => Err(Error::MissingField(field)),
    }
}
