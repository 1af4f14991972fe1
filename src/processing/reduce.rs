// Row-wise reduction of a loaded table

use crate::data::Table;

use super::{ProcessError, Statistic};

/// Reduce every row of a table to one scalar
///
/// Returns a lazy iterator with one result per row, in table row order.
/// A row with no observation columns yields an `EmptyRow` error instead
/// of a NaN or infinite sentinel.
pub fn reduce_rows(
    table: &Table,
    statistic: Statistic,
) -> impl Iterator<Item = Result<f64, ProcessError>> + '_ {
    let reduce = statistic.reducer();

    table.rows.iter().map(move |row| {
        if row.observations.is_empty() {
            return Err(ProcessError::EmptyRow {
                identifier: row.identifier.clone(),
            });
        }

        Ok(reduce(&row.observations))
    })
}
