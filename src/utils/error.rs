// Error handling utilities

use thiserror::Error;

use crate::cli::CliError;
use crate::data::DataError;
use crate::processing::ProcessError;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("argument error: {0}")]
    Cli(#[from] CliError),

    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("processing error: {0}")]
    Process(#[from] ProcessError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for AppError
pub type AppResult<T> = Result<T, AppError>;
