use std::time::Duration;

/// Per-call HTTP timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Longest the collector waits for the next outcome before giving up.
pub const LIVENESS_CEILING: Duration = Duration::from_secs(30);

/// Run-wide settings shared read-only by every test task.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL; request paths are appended verbatim.
    pub host: String,
    pub client_id: Option<String>,
    pub auth_token: Option<String>,
    pub timeout: Duration,
    pub debug: bool,
    pub liveness_ceiling: Duration,
}

impl EngineConfig {
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            client_id: None,
            auth_token: None,
            timeout: DEFAULT_TIMEOUT,
            debug: false,
            liveness_ceiling: LIVENESS_CEILING,
        }
    }
}
