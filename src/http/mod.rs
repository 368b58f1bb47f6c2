//! Outbound request construction and the shared HTTP transport.
mod builder;
mod client;

#[cfg(test)]
mod tests;

pub use builder::{build_request, compose_target};
pub use client::build_client;
