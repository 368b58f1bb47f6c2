use reqwest::Client;
use tracing::error;

use crate::error::{AppError, AppResult, HttpError};
use crate::runner::EngineConfig;

/// Builds the transport shared by every test of a run.
///
/// The per-call timeout lives here; requests themselves carry none.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(config: &EngineConfig) -> AppResult<Client> {
    match Client::builder().timeout(config.timeout).build() {
        Ok(client) => Ok(client),
        Err(err) => {
            error!("Failed to build HTTP client: {}", err);
            Err(AppError::http(HttpError::BuildClientFailed { source: err }))
        }
    }
}
