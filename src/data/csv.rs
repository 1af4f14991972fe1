// CSV table loading from files or standard input

use std::fs::File;
use std::io::{self, BufReader, Read};

use super::{DataError, Row, SourceRef, Table};

/// Name of the column that labels each row
pub const IDENTIFIER_COLUMN: &str = "country";

/// Read a full table from one source
///
/// The source is opened as comma-delimited text with a header row. The
/// `country` column labels each row; every other column is parsed as an
/// `f64` observation, in header order.
pub fn read_table(source: &SourceRef) -> Result<Table, DataError> {
    match source {
        SourceRef::Path(path) => {
            let file = File::open(path).map_err(|err| DataError::SourceNotFound {
                path: path.display().to_string(),
                source: err,
            })?;
            read_from(BufReader::new(file), &path.display().to_string())
        }
        SourceRef::Stdin => read_from(io::stdin().lock(), "<stdin>"),
    }
}

/// Read a table from any reader
fn read_from<R: Read>(reader: R, source_name: &str) -> Result<Table, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|err| map_csv_error(err, source_name))?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let identifier_index = headers
        .iter()
        .position(|name| name == IDENTIFIER_COLUMN)
        .ok_or_else(|| DataError::MissingIdentifier {
            source_name: source_name.to_string(),
            column: IDENTIFIER_COLUMN.to_string(),
        })?;

    let columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != identifier_index)
        .map(|(_, name)| name.clone())
        .collect();

    let mut rows = Vec::new();

    for result in csv_reader.records() {
        let record = result.map_err(|err| map_csv_error(err, source_name))?;
        let line = record.position().map_or(0, |pos| pos.line());

        let mut identifier = String::new();
        let mut observations = Vec::with_capacity(headers.len() - 1);

        for (index, field) in record.iter().enumerate() {
            if index == identifier_index {
                identifier = field.to_string();
                continue;
            }

            let value: f64 =
                field
                    .trim()
                    .parse()
                    .map_err(|_| DataError::ParseError {
                        source_name: source_name.to_string(),
                        line,
                        column: headers[index].clone(),
                        value: field.to_string(),
                    })?;

            observations.push(value);
        }

        rows.push(Row::new(identifier, observations));
    }

    Ok(Table::new(columns, rows))
}

/// Map a csv crate error into the data error taxonomy
fn map_csv_error(err: csv::Error, source_name: &str) -> DataError {
    if let csv::ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = err.kind()
    {
        return DataError::FieldCountMismatch {
            source_name: source_name.to_string(),
            line: pos.as_ref().map_or(0, |p| p.line()),
            expected: *expected_len as usize,
            found: *len as usize,
        };
    }

    DataError::Io {
        source_name: source_name.to_string(),
        source: err,
    }
}
