//! Response expectations: status code, body fields and latency.
mod json_path;


use std::time::Duration;

use bytes::Bytes;

use crate::error::TestFailure;
use crate::suite::ExpectationSpec;

pub use json_path::lookup_string;

/// Everything observed for one completed HTTP call.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub status: u16,
    /// The body, or the reason it could not be read.
    pub body: Result<Bytes, String>,
    pub latency: Duration,
    pub request_dump: String,
    pub response_dump: String,
}

/// Evaluates every expectation against an exchange.
///
/// An unreadable body stops the evaluation right after the status check.
/// In debug mode a failing exchange also gets the body, request and response
/// dumps appended.
#[must_use]
pub fn check_response(
    expect: &ExpectationSpec,
    exchange: &Exchange,
    debug: bool,
) -> Vec<TestFailure> {
    let mut failures = Vec::new();

    if exchange.status != expect.status_code {
        failures.push(TestFailure::StatusMismatch {
            expected: expect.status_code,
            actual: exchange.status,
        });
    }

    let body = match exchange.body.as_ref() {
        Ok(body) => body,
        Err(reason) => {
            failures.push(TestFailure::BodyRead {
                reason: reason.clone(),
            });
            return failures;
        }
    };

    for assertion in &expect.body {
        let actual = lookup_string(body, &assertion.path);
        if actual != assertion.value {
            failures.push(TestFailure::BodyValueMismatch {
                path: assertion.path.clone(),
                expected: assertion.value.clone(),
                actual,
            });
        }
    }

    if let Some(max) = expect.max_latency
        && exchange.latency > max
    {
        failures.push(TestFailure::LatencyExceeded {
            max,
            actual: exchange.latency,
        });
    }

    if debug && !failures.is_empty() {
        failures.push(TestFailure::DebugBody(
            String::from_utf8_lossy(body).into_owned(),
        ));
        failures.push(TestFailure::DebugRequest(exchange.request_dump.clone()));
        failures.push(TestFailure::DebugResponse(exchange.response_dump.clone()));
    }

    failures
}
