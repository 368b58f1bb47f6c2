use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(
        "No outcome received for {ceiling:?}; only {received} of {total} outcomes were processed."
    )]
    CollectorStalled {
        received: usize,
        total: usize,
        ceiling: Duration,
    },
    #[error("Outcome channel closed after {received} of {total} outcomes.")]
    OutcomeChannelClosed { received: usize, total: usize },
}
