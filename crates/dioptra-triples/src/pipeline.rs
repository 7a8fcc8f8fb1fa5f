//! Orchestration: validate, find Pell samples, enumerate, run the recurrence.

use dioptra_solve::{enumerate_solutions, find_samples, SolveError};
use tracing::{info, instrument, warn};

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::recurrence::TripleRecurrenceEngine;
use crate::table::ResultTable;

/// Runs the whole construction and returns the finished table.
///
/// Parameters are validated before any search. The Pell samples are looked
/// up before the sweep so that an unsolvable `z` fails fast.
///
/// # Errors
///
/// Returns [`PipelineError::Solve`] for invalid parameters or a missing Pell
/// sample, and [`PipelineError::Triple`] for an arithmetic invariant
/// violation in the recurrence.
#[instrument(skip_all, fields(z = config.params.z, max_n = config.params.max_n))]
pub fn run_pipeline(config: &PipelineConfig) -> Result<ResultTable, PipelineError> {
    let params = &config.params;
    params.validate()?;

    let samples = find_samples(params.z, params.pell_search_limit)?;
    let records = enumerate_solutions(params);
    info!(records = records.len(), "quadratic form sweep finished");

    let engine = TripleRecurrenceEngine::new(params.z, &samples)?
        .with_halving(config.halving)
        .with_parallel(params.parallel.clone());
    let table = engine.run(records, params.iterations)?;

    info!(
        records = table.records().len(),
        columns = table.columns().len(),
        "pipeline finished"
    );
    Ok(table)
}

/// Runs the pipeline and hands the table to `consumer`.
///
/// When no Pell sample exists the consumer receives an empty table before
/// the error is returned; other failures never reach the consumer.
///
/// # Errors
///
/// Same as [`run_pipeline`].
pub fn run_with_consumer<F>(config: &PipelineConfig, consumer: F) -> Result<(), PipelineError>
where
    F: FnOnce(&ResultTable),
{
    match run_pipeline(config) {
        Ok(table) => {
            consumer(&table);
            Ok(())
        }
        Err(err @ PipelineError::Solve(SolveError::NoSolutionFound { .. })) => {
            warn!(%err, "reporting empty result");
            consumer(&ResultTable::empty());
            Err(err)
        }
        Err(err) => Err(err),
    }
}
