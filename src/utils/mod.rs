// Utility module for cross-cutting concerns

mod error;
mod logging;

pub use error::*;
pub use logging::*;
