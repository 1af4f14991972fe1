// Row Aggregator

//! # Row Aggregator
//!
//! A small engine for row-wise aggregation of CSV observation tables.
//!
//! Input tables are comma-delimited text with a header row. The column
//! named `country` labels each row; every other column is a numeric
//! observation. The engine reduces each row to a single scalar (minimum,
//! arithmetic mean, or maximum) and emits one value per line, in row
//! order, source by source.
//!
//! ## Example
//!
//! ```rust
//! use row_aggregator::{
//!     data::{Row, Table},
//!     processing::{reduce_rows, Statistic},
//! };
//!
//! // Build a table
//! let table = Table::new(
//!     vec!["a".to_string(), "b".to_string(), "c".to_string()],
//!     vec![
//!         Row::new("X".to_string(), vec![1.0, 2.0, 3.0]),
//!         Row::new("Y".to_string(), vec![4.0, 5.0, 6.0]),
//!     ],
//! );
//!
//! // Reduce every row to its mean
//! let values: Vec<f64> = reduce_rows(&table, Statistic::Mean)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(values, vec![2.0, 5.0]);
//! ```

pub mod cli;
pub mod data;
pub mod driver;
pub mod processing;
pub mod utils;

// Re-export main types
pub use cli::{Invocation, InvocationSpec};
pub use data::{SourceRef, Table};
pub use processing::Statistic;
pub use utils::{AppError, AppResult};
