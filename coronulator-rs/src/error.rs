use crate::prelude::{Dimension, Real};
use thiserror::Error;

/// Errors raised by the risk engine itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    #[error("invalid value {value} for {dimension}")]
    InvalidInput { dimension: Dimension, value: Real },
    #[error("option index {index} is out of range for {dimension} ({len} options)")]
    IndexOutOfRange {
        dimension: Dimension,
        index: usize,
        len: usize,
    },
    #[error("probability is zero, odds are undefined")]
    DegenerateProbability,
    #[error("unknown risk dimension '{0}'")]
    UnknownDimension(String),
}

/// Errors surfaced while reading configuration files or batches of selections.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: RiskError,
    },
    #[error(transparent)]
    Risk(#[from] RiskError),
}
