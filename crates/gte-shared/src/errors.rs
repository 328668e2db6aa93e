use thiserror::Error;

use crate::{
    const_config::{error::ERROR_FALLBACK_MESSAGE, registration::REGISTRATION_ERROR_MESSAGE},
    uac::FieldError,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),
    #[error("Field `{0}` must be a string or a number")]
    InvalidField(&'static str),
}

/// Outcome of a failed request to the platform backend
#[derive(Debug, Error)]
pub enum RequestError {
    /// The server answered with an error body carrying a message for the user
    #[error("{0}")]
    Server(String),
    /// The payload was rejected locally and no request was sent
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),
    #[error("Unexpected Error: {0:#}")]
    Unknown(#[from] anyhow::Error),
}

impl RequestError {
    /// The text to show to the user for this error
    ///
    /// Server messages are passed through verbatim, anything that is not
    /// understood is replaced by a generic message
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Server(msg) => msg.clone(),
            RequestError::Validation(errors) => errors
                .iter()
                .map(|e| e.error.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            RequestError::Unknown(_) => ERROR_FALLBACK_MESSAGE.to_string(),
        }
    }

    /// The text to show when creating an account failed
    ///
    /// Only local validation failures are detailed, the server's reason is
    /// never shown for a failed registration
    pub fn registration_message(&self) -> String {
        match self {
            RequestError::Validation(_) => self.user_message(),
            RequestError::Server(_) | RequestError::Unknown(_) => {
                REGISTRATION_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Returns `true` if the request error is [`Server`].
    ///
    /// [`Server`]: RequestError::Server
    #[must_use]
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server(..))
    }

    /// Returns `true` if the request error is [`Unknown`].
    ///
    /// [`Unknown`]: RequestError::Unknown
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(..))
    }
}
