use std::error::Error as _;
use std::sync::Arc;

use reqwest::Client;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::check::{Exchange, check_response};
use crate::error::TestFailure;
use crate::http::build_request;
use crate::suite::TestDefinition;

use super::config::EngineConfig;
use super::types::Outcome;

/// Read-only state handed to every test task.
#[derive(Debug)]
pub(super) struct EngineContext {
    pub(super) client: Client,
    pub(super) config: EngineConfig,
}

pub(super) fn spawn_test_task(
    context: Arc<EngineContext>,
    test: TestDefinition,
    outcome_tx: mpsc::Sender<Outcome>,
) {
    tokio::spawn(async move {
        let failures = execute_test(&context, &test).await;
        let name = test.name.clone();
        if outcome_tx.send(Outcome { test, failures }).await.is_err() {
            warn!("Collector went away before outcome of '{}' was delivered", name);
        }
    });
}

/// Builds, sends and checks one test. Errors before a response exists become
/// a single failure.
pub(super) async fn execute_test(
    context: &EngineContext,
    test: &TestDefinition,
) -> Vec<TestFailure> {
    let debug_mode = context.config.debug;
    let request = match build_request(&context.config, &test.request) {
        Ok(request) => request,
        Err(failure) => return vec![failure],
    };
    debug!(
        "Built request for '{}': {} {}",
        test.name,
        request.method(),
        request.url()
    );
    let request_dump = if debug_mode {
        format!("{:?}", request)
    } else {
        String::new()
    };

    let started = Instant::now();
    let response = match context.client.execute(request).await {
        Ok(response) => response,
        Err(err) => return vec![transport_failure(&err)],
    };
    let latency = started.elapsed();
    let status = response.status().as_u16();
    debug!("'{}' answered {} in {:?}", test.name, status, latency);
    let response_dump = if debug_mode {
        format!("{:?}", response)
    } else {
        String::new()
    };

    let body = response.bytes().await.map_err(|err| describe(&err));
    let exchange = Exchange {
        status,
        body,
        latency,
        request_dump,
        response_dump,
    };
    check_response(&test.expect, &exchange, debug_mode)
}

fn transport_failure(err: &reqwest::Error) -> TestFailure {
    let reason = if err.is_timeout() {
        format!("timed out: {}", describe(err))
    } else {
        describe(err)
    };
    TestFailure::Transport { reason }
}

fn describe(err: &reqwest::Error) -> String {
    match err.source() {
        Some(source) => format!("{} ({})", err, source),
        None => err.to_string(),
    }
}
