use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::error::{AppError, AppResult, ValidationError};
use crate::runner::{EngineConfig, LIVENESS_CEILING};

use super::parsers::{parse_bool_env, parse_host, parse_timeout_secs};

#[derive(Debug, Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the version
    #[command(visible_aliases = ["v", "ver", "about"])]
    Version,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "jetcheck",
    version,
    about = "A command-line tool for testing APIs using YAML test suites.",
    subcommand_negates_reqs = true
)]
pub struct JetArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// API host every request path is appended to (e.g. https://api.example.com)
    #[arg(long, env = "JETCHECK_HOST", required = true, value_parser = parse_host)]
    pub host: Option<String>,

    /// Path to the test suite (YAML, JSON or TOML)
    #[arg(long, short = 'f', env = "JETCHECK_FILE", required = true)]
    pub file: Option<PathBuf>,

    /// Client ID sent as the client-id header by tests that ask for it
    #[arg(
        long = "client-id",
        visible_aliases = ["clientID", "cid"],
        env = "JETCHECK_CLIENT_ID"
    )]
    pub client_id: Option<String>,

    /// Token sent as the Authorization header by tests that ask for it
    #[arg(
        long = "auth-token",
        visible_aliases = ["authToken", "at"],
        env = "JETCHECK_AUTH_TOKEN",
        hide_env_values = true
    )]
    pub auth_token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(
        long,
        short = 't',
        env = "JETCHECK_TIMEOUT",
        default_value = "30",
        value_parser = parse_timeout_secs
    )]
    pub timeout: Duration,

    /// Show passing tests, request/response dumps for failures, and debug logs
    #[arg(long, short = 'd', env = "JETCHECK_DEBUG", value_parser = parse_bool_env)]
    pub debug: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Do not print the banner
    #[arg(long = "no-banner", env = "JETCHECK_NO_BANNER", value_parser = parse_bool_env)]
    pub no_banner: bool,
}

impl JetArgs {
    /// Builds the run configuration from the parsed flags.
    ///
    /// # Errors
    ///
    /// Returns an error when no host was given.
    pub fn engine_config(&self) -> AppResult<EngineConfig> {
        let host = self
            .host
            .clone()
            .ok_or_else(|| AppError::validation(ValidationError::EmptyHost))?;
        Ok(EngineConfig {
            host,
            client_id: self.client_id.clone(),
            auth_token: self.auth_token.clone(),
            timeout: self.timeout,
            debug: self.debug,
            liveness_ceiling: LIVENESS_CEILING,
        })
    }
}
