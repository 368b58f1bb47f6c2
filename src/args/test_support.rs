use clap::Parser;

use crate::error::{AppError, AppResult};

use super::JetArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<JetArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    JetArgs::try_parse_from(args).map_err(AppError::from)
}
