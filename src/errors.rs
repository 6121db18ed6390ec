use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Need to load user preferences before you can save them")]
    NoUserContext,

    #[error("Invalid user name: {0:?}")]
    InvalidUserName(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Server responded with {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Failed to parse server response: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl PreferenceError {
    /// True for failures that came from the server or the network, as opposed
    /// to usage errors caught before any request was sent.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            PreferenceError::HttpError(_)
                | PreferenceError::ApiError { .. }
                | PreferenceError::ParseError(_)
        )
    }
}

impl From<reqwest::Error> for PreferenceError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            PreferenceError::ParseError(error.to_string())
        } else {
            PreferenceError::HttpError(error.to_string())
        }
    }
}

impl From<serde_json::Error> for PreferenceError {
    fn from(error: serde_json::Error) -> Self {
        PreferenceError::ParseError(error.to_string())
    }
}

impl From<url::ParseError> for PreferenceError {
    fn from(error: url::ParseError) -> Self {
        PreferenceError::ConfigError(format!("invalid URL: {error}"))
    }
}
