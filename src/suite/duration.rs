use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::ValidationError;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60_000_000_000;
const NANOS_PER_HOUR: u128 = 3_600_000_000_000;

/// Parses a duration such as `250ms`, `1s`, `1.5s` or `1m30s`.
///
/// Supported units are `ns`, `us`/`µs`, `ms`, `s`, `m` and `h`. Every
/// number needs a unit; only `0` may be written without one.
///
/// # Errors
///
/// Returns an error for empty input, a missing or unknown unit, or a value
/// that overflows `u64` nanoseconds.
pub fn parse_duration(input: &str) -> Result<Duration, ValidationError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }
    if value == "0" {
        return Ok(Duration::ZERO);
    }

    let invalid = || ValidationError::InvalidDurationFormat {
        value: value.to_owned(),
    };

    let mut total: u128 = 0;
    let mut rest = value;
    while !rest.is_empty() {
        let (whole_part, tail) = split_digits(rest);
        let (fraction_part, tail) = match tail.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", tail),
        };
        if whole_part.is_empty() && fraction_part.is_empty() {
            return Err(invalid());
        }

        let unit_len = tail
            .find(|ch: char| ch.is_ascii_digit() || ch == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);
        let unit_nanos = match unit {
            "ns" => 1,
            "us" | "µs" | "μs" => NANOS_PER_MICRO,
            "ms" => NANOS_PER_MILLI,
            "s" => NANOS_PER_SEC,
            "m" => NANOS_PER_MIN,
            "h" => NANOS_PER_HOUR,
            "" => {
                return Err(ValidationError::MissingDurationUnit {
                    value: value.to_owned(),
                });
            }
            other => {
                return Err(ValidationError::UnknownDurationUnit {
                    value: value.to_owned(),
                    unit: other.to_owned(),
                });
            }
        };

        let whole = parse_digits(whole_part)?;
        let mut nanos = whole
            .checked_mul(unit_nanos)
            .ok_or(ValidationError::DurationOverflow)?;
        if !fraction_part.is_empty() {
            let digits = u32::try_from(fraction_part.len())
                .ok()
                .ok_or(ValidationError::DurationOverflow)?;
            let scale = 10u128
                .checked_pow(digits)
                .ok_or(ValidationError::DurationOverflow)?;
            let fraction = parse_digits(fraction_part)?
                .checked_mul(unit_nanos)
                .and_then(|scaled| scaled.checked_div(scale))
                .ok_or(ValidationError::DurationOverflow)?;
            nanos = nanos
                .checked_add(fraction)
                .ok_or(ValidationError::DurationOverflow)?;
        }
        total = total
            .checked_add(nanos)
            .ok_or(ValidationError::DurationOverflow)?;
        rest = next;
    }

    let nanos = u64::try_from(total)
        .ok()
        .ok_or(ValidationError::DurationOverflow)?;
    Ok(Duration::from_nanos(nanos))
}

fn split_digits(input: &str) -> (&str, &str) {
    let len = input
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(len)
}

fn parse_digits(digits: &str) -> Result<u128, ValidationError> {
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse::<u128>()
        .ok()
        .ok_or(ValidationError::DurationOverflow)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DurationValue {
    Nanos(u64),
    Text(String),
}

/// Integers are nanoseconds, strings go through [`parse_duration`].
pub(super) fn deserialize_opt_duration<'de, D>(
    deserializer: D,
) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<DurationValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(DurationValue::Nanos(nanos)) => Ok(Some(Duration::from_nanos(nanos))),
        Some(DurationValue::Text(text)) => parse_duration(&text)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
