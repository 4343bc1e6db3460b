use std::borrow::Cow;
use thiserror::Error;

/// Errors from schema inference and kind detection.
#[derive(Debug, Error)]
pub enum SenseError {
    #[error("invalid input: {details}")]
    InvalidInput { details: Cow<'static, str> },

    #[error("unparseable flavor string: {details}")]
    Flavor { details: Cow<'static, str> },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SenseError {
    pub fn invalid_input(details: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidInput {
            details: details.into(),
        }
    }

    pub fn flavor(details: impl Into<Cow<'static, str>>) -> Self {
        Self::Flavor {
            details: details.into(),
        }
    }
}

/// Errors from document sampling.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("operation cancelled")]
    Cancelled,

    #[error("source error: {details}")]
    Source { details: Cow<'static, str> },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SampleError {
    pub fn source(details: impl Into<Cow<'static, str>>) -> Self {
        Self::Source {
            details: details.into(),
        }
    }
}

pub type SenseResult<T> = Result<T, SenseError>;
pub type SampleResult<T> = Result<T, SampleError>;
