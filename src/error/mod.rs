mod app;
mod failure;
mod http;
mod run;
mod suite;
mod validation;

pub use app::{AppError, AppResult};
pub use failure::TestFailure;
pub use http::HttpError;
pub use run::RunError;
pub use suite::SuiteError;
pub use validation::ValidationError;
