//! Core library for the `jetcheck` CLI.
//!
//! `jetcheck` runs a declarative suite of HTTP checks against one host: each
//! test names a request, the status code it must return, JSON body fields
//! that must match, and a latency bound. Tests run concurrently and the
//! results are folded into a pass/fail summary.
//!
//! The main entry point is [`runner::run_suite`], fed by
//! [`suite::load_suite`] and a [`runner::EngineConfig`].
pub mod args;
pub mod check;
pub mod error;
pub mod http;
pub mod runner;
pub mod suite;
