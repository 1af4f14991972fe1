// Statistic selection and the reduction functions behind it

/// The row-wise aggregation selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Min,
    Mean,
    Max,
}

impl Statistic {
    /// Parse a command-line flag into a statistic
    ///
    /// Accepts the canonical long form (`--min`, `--mean`, `--max`) and
    /// the short aliases (`-n`, `-m`, `-x`).
    pub fn from_flag(token: &str) -> Option<Self> {
        match token {
            "--min" | "-n" => Some(Statistic::Min),
            "--mean" | "-m" => Some(Statistic::Mean),
            "--max" | "-x" => Some(Statistic::Max),
            _ => None,
        }
    }

    /// Get the canonical flag for this statistic
    pub fn flag(&self) -> &'static str {
        match self {
            Statistic::Min => "--min",
            Statistic::Mean => "--mean",
            Statistic::Max => "--max",
        }
    }

    /// Get the pure reduction function for this statistic
    ///
    /// Callers must not pass an empty slice; the reducer layer guards
    /// that case with an explicit error.
    pub fn reducer(self) -> fn(&[f64]) -> f64 {
        match self {
            Statistic::Min => reduce_min,
            Statistic::Mean => reduce_mean,
            Statistic::Max => reduce_max,
        }
    }
}

/// Compute the minimum of values
fn reduce_min(values: &[f64]) -> f64 {
    values.iter().fold(f64::INFINITY, |a, &b| a.min(b))
}

/// Compute the arithmetic mean of values
fn reduce_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Compute the maximum of values
fn reduce_max(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
}
