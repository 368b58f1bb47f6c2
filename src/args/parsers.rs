use std::time::Duration;

use crate::error::{AppError, AppResult, ValidationError};

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

pub(super) fn parse_host(s: &str) -> AppResult<String> {
    let host = s.trim();
    if host.is_empty() {
        return Err(AppError::validation(ValidationError::EmptyHost));
    }
    Ok(host.to_owned())
}

pub(super) fn parse_timeout_secs(s: &str) -> AppResult<Duration> {
    let secs: u64 = s.trim().parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidTimeout {
            value: s.to_owned(),
            source: err,
        })
    })?;
    if secs == 0 {
        return Err(AppError::validation(ValidationError::TimeoutZero));
    }
    Ok(Duration::from_secs(secs))
}
