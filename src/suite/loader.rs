use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, AppResult, SuiteError};

use super::types::{SuiteFile, TestDefinition};

/// Loads the test definitions from a suite file.
///
/// The format is chosen from the file extension: `.yaml`/`.yml`, `.json`
/// or `.toml`.
///
/// # Errors
///
/// Returns an error when the file cannot be read, cannot be parsed, or has an
/// unsupported extension.
pub fn load_suite(path: &Path) -> AppResult<Vec<TestDefinition>> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::suite(SuiteError::ReadSuite {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let suite = parse_suite(path, &content)?;
    debug!(
        "Loaded {} test(s) from {}",
        suite.tests.len(),
        path.display()
    );
    Ok(suite.tests)
}

fn parse_suite(path: &Path, content: &str) -> AppResult<SuiteFile> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str::<Option<SuiteFile>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|err| {
                AppError::suite(SuiteError::ParseYaml {
                    path: path.to_path_buf(),
                    source: err,
                })
            }),
        Some("json") => parse_json_suite(content).map_err(|err| {
            AppError::suite(SuiteError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("toml") => toml::from_str(content).map_err(|err| {
            AppError::suite(SuiteError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some(ext) => Err(AppError::suite(SuiteError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::suite(SuiteError::MissingExtension)),
    }
}

fn parse_json_suite(content: &str) -> Result<SuiteFile, serde_json::Error> {
    let mut document: Value = serde_json::from_str(content)?;
    if let Some(tests) = document.get_mut("tests").and_then(Value::as_array_mut) {
        tests.iter_mut().for_each(stringify_text_fields);
    }
    serde_json::from_value(document)
}

/// Text fields only accept JSON strings, so numbers and booleans written
/// there are turned into their JSON text first.
fn stringify_text_fields(test: &mut Value) {
    if let Some(request) = test.get_mut("request") {
        if let Some(body) = request.get_mut("body") {
            stringify(body);
        }
        for key in ["params", "headers"] {
            let Some(map) = request.get_mut(key).and_then(Value::as_object_mut) else {
                continue;
            };
            for values in map.values_mut() {
                match values.as_array_mut() {
                    Some(items) => items.iter_mut().for_each(stringify),
                    None => stringify(values),
                }
            }
        }
    }
    if let Some(assertions) = test
        .pointer_mut("/expect/body")
        .and_then(Value::as_array_mut)
    {
        for assertion in assertions {
            if let Some(value) = assertion.get_mut("value") {
                stringify(value);
            }
        }
    }
}

fn stringify(value: &mut Value) {
    if matches!(value, Value::Bool(_) | Value::Number(_)) {
        *value = Value::String(value.to_string());
    }
}
