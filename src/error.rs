/// Failure handed to the error path of the context builder.
///
/// Carries a human-readable message and, optionally, the status code the
/// transport already decided on (e.g. an HTTP exception with a 404).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ExchangeError {
    pub message: String,
    pub status: Option<u16>,
}

impl ExchangeError {
    pub fn new(message: impl Into<String>) -> Self {
        ExchangeError {
            message: message.into(),
            status: None,
        }
    }

    /// Attach a transport status code to the error.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Error type returned when reading [`ContextConfig`](crate::config::ContextConfig)
/// from the environment.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid boolean value {value:?} for {key}")]
    InvalidBool { key: String, value: String },
}
