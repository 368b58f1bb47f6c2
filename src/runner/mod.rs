//! Concurrent execution of a test suite.
//!
//! One tokio task runs each test and sends its [`Outcome`] over a bounded
//! channel. A single collector receives exactly one outcome per test, with a
//! fresh liveness deadline for every receive, and folds them into a
//! [`RunSummary`].
mod collector;
mod config;
mod report;
mod task;
mod types;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::http::build_client;
use crate::suite::TestDefinition;

pub use config::{DEFAULT_TIMEOUT, EngineConfig, LIVENESS_CEILING};
pub use report::{ConsoleReporter, Reporter, outcome_lines};
pub use types::{Outcome, RunSummary};

use collector::collect_outcomes;
use task::{EngineContext, spawn_test_task};

/// Senders wait for the collector instead of queueing outcomes.
const OUTCOME_CHANNEL_CAPACITY: usize = 1;

/// Runs every test concurrently and returns the aggregated counts.
///
/// Per-test problems (bad method, transport errors, mismatches) only mark
/// that test as failed.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built, or when the
/// collector stops receiving outcomes (`CollectorStalled` after the liveness
/// ceiling, `OutcomeChannelClosed` if a task vanished).
pub async fn run_suite<R>(
    config: EngineConfig,
    tests: Vec<TestDefinition>,
    reporter: &mut R,
) -> AppResult<RunSummary>
where
    R: Reporter + ?Sized,
{
    let client = build_client(&config)?;
    let total = tests.len();
    let ceiling = config.liveness_ceiling;
    info!("Running {} test(s) against {}", total, config.host);

    let context = Arc::new(EngineContext { client, config });
    let (outcome_tx, outcome_rx) = mpsc::channel::<Outcome>(OUTCOME_CHANNEL_CAPACITY);
    for test in tests {
        spawn_test_task(Arc::clone(&context), test, outcome_tx.clone());
    }
    drop(outcome_tx);

    let summary = collect_outcomes(outcome_rx, total, ceiling, reporter)
        .await
        .map_err(AppError::run)?;
    info!(
        "Run finished: {} total, {} passed, {} failed",
        summary.total, summary.passed, summary.failed
    );
    Ok(summary)
}
