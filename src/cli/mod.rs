// Command-line argument interpretation

use std::path::PathBuf;

use thiserror::Error;

use crate::data::SourceRef;
use crate::processing::Statistic;

/// Represents one fully interpreted invocation
///
/// Built once from the raw argument tokens and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationSpec {
    pub statistic: Statistic,
    pub sources: Vec<SourceRef>,
}

/// Outcome of interpreting the argument tokens
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// No arguments at all: print usage and exit cleanly
    Help,
    /// Process the given sources with the given statistic
    Run(InvocationSpec),
}

/// Represents an error in argument interpretation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("action is not one of --min, --mean, or --max: {0}")]
    InvalidAction(String),
}

/// Interpret the raw argument tokens (program name excluded)
///
/// The first token selects the statistic. A token that looks like a flag
/// but is not recognized is an error; any other first token defaults the
/// statistic to mean and is treated as the first file path. With no file
/// paths at all, the single source is standard input.
pub fn parse_args(tokens: &[String]) -> Result<Invocation, CliError> {
    let (first, rest) = match tokens.split_first() {
        Some(split) => split,
        None => return Ok(Invocation::Help),
    };

    let (statistic, paths) = match Statistic::from_flag(first) {
        Some(statistic) => (statistic, rest),
        None if first.starts_with('-') => {
            return Err(CliError::InvalidAction(first.clone()));
        }
        // Not a flag at all: default to mean and keep the token as a path
        None => (Statistic::Mean, tokens),
    };

    let sources = if paths.is_empty() {
        vec![SourceRef::Stdin]
    } else {
        paths
            .iter()
            .map(|path| SourceRef::Path(PathBuf::from(path)))
            .collect()
    };

    Ok(Invocation::Run(InvocationSpec { statistic, sources }))
}

/// Get the usage message shown for a bare invocation
pub fn usage() -> String {
    concat!(
        "Usage: row-aggregator [action] [filenames...]\n",
        "Action:\n",
        "    Must be one of --min, --mean, or --max (short: -n, -m, -x).\n",
        "    Defaults to --mean when the first argument is a filename.\n",
        "Filenames:\n",
        "    If blank, input is taken from standard input (stdin).\n",
        "    Otherwise, each filename in the list of arguments is processed in turn.",
    )
    .to_string()
}
