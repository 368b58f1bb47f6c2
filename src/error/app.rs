use thiserror::Error;

use super::{HttpError, RunError, SuiteError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Suite error: {0}")]
    Suite(#[from] SuiteError),
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    #[error("Run error: {0}")]
    Run(#[from] RunError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn suite<E>(error: E) -> Self
    where
        E: Into<SuiteError>,
    {
        error.into().into()
    }

    pub fn http<E>(error: E) -> Self
    where
        E: Into<HttpError>,
    {
        error.into().into()
    }

    pub fn run<E>(error: E) -> Self
    where
        E: Into<RunError>,
    {
        error.into().into()
    }
}
