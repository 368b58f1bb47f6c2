use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Failed to read suite '{path}': {source}")]
    ReadSuite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse YAML suite '{path}': {source}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Failed to parse JSON suite '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse TOML suite '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Unsupported suite extension '{ext}'. Use .yaml, .yml, .json or .toml.")]
    UnsupportedExtension { ext: String },
    #[error("Suite file must have a .yaml, .yml, .json or .toml extension.")]
    MissingExtension,
}
