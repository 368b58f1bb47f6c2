//! Test suite model and file loading.
mod duration;
mod loader;
mod types;


pub use duration::parse_duration;
pub use loader::load_suite;
pub use types::{
    BodyAssertion, ExpectationSpec, HttpMethod, MultiMap, RequestSpec, SuiteFile, TestDefinition,
};
