//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;

#[cfg(test)]
mod test_support;

pub use cli::{Command, JetArgs};
