// Processing module for row-wise reduction

mod reduce;
mod statistic;

pub use reduce::*;
pub use statistic::*;

use thiserror::Error;

/// Represents an error in the processing module
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessError {
    #[error("row '{identifier}' has no observation columns to reduce")]
    EmptyRow { identifier: String },
}
