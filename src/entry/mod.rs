use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};
use tracing::debug;

use crate::args::{Command, JetArgs};
use crate::error::{AppError, AppResult, ValidationError};
use crate::runner::{ConsoleReporter, run_suite};
use crate::suite::load_suite;
use crate::system::banner::{print_cli_banner, print_version};
use crate::system::summary_output::print_summary;

/// Runs the CLI and maps the outcome to a process exit code: success only
/// when every test passed.
pub(crate) fn run() -> AppResult<ExitCode> {
    let args = parse_args()?;

    crate::system::logger::init_logging(args.debug, args.no_color);

    if matches!(args.command, Some(Command::Version)) {
        print_version(args.no_color);
        return Ok(ExitCode::SUCCESS);
    }
    if !args.no_banner {
        print_cli_banner(args.no_color);
    }

    let config = args.engine_config()?;
    let suite_path = args
        .file
        .as_deref()
        .ok_or_else(|| AppError::validation(ValidationError::MissingSuiteFile))?;
    let tests = load_suite(suite_path)?;
    println!("Testing host: {}", config.host);
    debug!(
        "timeout={:?} client_id={} auth_token={}",
        config.timeout,
        config.client_id.is_some(),
        config.auth_token.is_some()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let debug_mode = config.debug;
    let mut reporter = ConsoleReporter::new(debug_mode);
    let summary = runtime.block_on(run_suite(config, tests, &mut reporter))?;
    print_summary(&summary, debug_mode);

    if summary.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn parse_args() -> AppResult<JetArgs> {
    let matches = JetArgs::command().get_matches_from(std::env::args_os());
    let args = JetArgs::from_arg_matches(&matches)?;
    Ok(args)
}
