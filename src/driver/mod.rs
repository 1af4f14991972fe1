// Output driver: load, reduce, and print each source in turn

use std::io::Write;

use log::{debug, info};

use crate::cli::InvocationSpec;
use crate::data::{read_table, SourceRef};
use crate::processing::{reduce_rows, Statistic};
use crate::utils::AppResult;

/// Process every source of an invocation, in order
///
/// Each source is fully loaded and fully reduced before the next one
/// begins. A failure on any source aborts the run; lines already written
/// for earlier rows and sources remain on the output.
pub fn run<W: Write>(spec: &InvocationSpec, out: &mut W) -> AppResult<()> {
    debug!("selected statistic: {}", spec.statistic.flag());

    for source in &spec.sources {
        process_source(source, spec.statistic, out)?;
    }

    Ok(())
}

/// Load one source and print one reduced scalar per row
fn process_source<W: Write>(
    source: &SourceRef,
    statistic: Statistic,
    out: &mut W,
) -> AppResult<()> {
    let table = read_table(source)?;
    info!("loaded {} rows from {}", table.len(), source);

    for value in reduce_rows(&table, statistic) {
        writeln!(out, "{}", format_scalar(value?))?;
    }

    Ok(())
}

/// Format one reduced scalar for output
///
/// Integral values keep a trailing `.0` (`2.0`, not `2`); everything else
/// uses the shortest representation that round-trips through `f64`.
pub fn format_scalar(value: f64) -> String {
    format!("{:?}", value)
}
