//! Evaluate many selections at once.
//!
//! Input is a CSV file with one selection per row, using the dimension keys as
//! headers. Missing columns take their default index and unknown columns are
//! ignored. Output rows keep the input order.
use crate::{
    catalog::Selection,
    error::{InputError, RiskError},
    prelude::Real,
    risk::{estimate, format_probability, Estimate},
    utils::{Stats, StatsAcc, Summary},
};
use getset::*;
use log::*;
use rayon::prelude::*;
use serde::Serialize;
use std::io;

/// Result of evaluating a single selection.
#[derive(Debug, Clone, PartialEq, Serialize, Getters, CopyGetters)]
pub struct BatchRow {
    #[getset(get_copy = "pub")]
    row: usize,
    #[getset(get_copy = "pub")]
    infection: Real,
    #[getset(get_copy = "pub")]
    fatality: Real,
    #[getset(get_copy = "pub")]
    death: Real,
    #[getset(get = "pub")]
    figure: String,
}

impl BatchRow {
    pub fn new(row: usize, est: Estimate) -> Self {
        BatchRow {
            row,
            infection: est.infection(),
            fatality: est.fatality(),
            death: est.death(),
            figure: format_probability(est.death()),
        }
    }
}

/// Read selections from CSV data with a header row.
pub fn read_selections(reader: impl io::Read) -> Result<Vec<Selection>, InputError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut selections = Vec::new();
    for res in reader.deserialize() {
        selections.push(res?);
    }
    debug!("read {} selections", selections.len());
    Ok(selections)
}

/// Resolve and estimate all selections in parallel.
///
/// Rows are numbered from 0. Fails with the first invalid row, in input
/// order.
pub fn evaluate(selections: &[Selection]) -> Result<Vec<BatchRow>, InputError> {
    let results: Vec<_> = selections
        .par_iter()
        .enumerate()
        .map(|(row, sel)| -> Result<BatchRow, RiskError> {
            let est = estimate(&sel.resolve()?)?;
            Ok(BatchRow::new(row, est))
        })
        .collect();

    results
        .into_iter()
        .enumerate()
        .map(|(row, res)| res.map_err(|source| InputError::Row { row, source }))
        .collect()
}

/// Write rows as CSV, with a header.
pub fn write_rows(writer: impl io::Write, rows: &[BatchRow]) -> Result<(), InputError> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Summary statistics of the death probabilities. None for an empty batch.
pub fn summarize(rows: &[BatchRow]) -> Option<Summary> {
    if rows.is_empty() {
        return None;
    }
    let mut acc = StatsAcc::new();
    acc.add_many(rows.iter().map(|r| r.death));
    Some(acc.summary())
}

/// One line description of a batch, used by the command line front end.
pub fn summary_line(rows: &[BatchRow]) -> String {
    match summarize(rows) {
        Some(summary) => summary.to_string(),
        None => "n=0".to_string(),
    }
}
