use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{debug, error};

use crate::error::RunError;

use super::report::Reporter;
use super::types::{Outcome, RunSummary};

/// Receives exactly `total` outcomes, reporting each as it arrives.
///
/// Every receive gets its own `ceiling`; running out of it is fatal for the
/// run, as is the channel closing early.
pub(super) async fn collect_outcomes<R>(
    mut outcome_rx: mpsc::Receiver<Outcome>,
    total: usize,
    ceiling: Duration,
    reporter: &mut R,
) -> Result<RunSummary, RunError>
where
    R: Reporter + ?Sized,
{
    let mut summary = RunSummary::new(total);
    for received in 0..total {
        let outcome = match timeout(ceiling, outcome_rx.recv()).await {
            Ok(Some(outcome)) => outcome,
            Ok(None) => {
                error!("Outcome channel closed after {} of {} outcomes", received, total);
                return Err(RunError::OutcomeChannelClosed { received, total });
            }
            Err(elapsed) => {
                error!("No outcome within {:?} ({})", ceiling, elapsed);
                return Err(RunError::CollectorStalled {
                    received,
                    total,
                    ceiling,
                });
            }
        };
        debug!(
            "Outcome {}/{} for '{}'",
            received.saturating_add(1),
            total,
            outcome.test.name
        );
        reporter.report(&outcome);
        summary.record(&outcome);
    }
    outcome_rx.close();
    Ok(summary)
}
