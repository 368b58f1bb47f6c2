use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Host must not be empty.")]
    EmptyHost,
    #[error("Missing test suite file (set --file or JETCHECK_FILE).")]
    MissingSuiteFile,
    #[error("Timeout must be at least 1 second.")]
    TimeoutZero,
    #[error("Invalid timeout '{value}': {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Duration '{value}' is missing a unit (ns, us, ms, s, m, h).")]
    MissingDurationUnit { value: String },
    #[error("Unknown duration unit '{unit}' in '{value}'.")]
    UnknownDurationUnit { value: String, unit: String },
    #[error("Duration overflow.")]
    DurationOverflow,
}
