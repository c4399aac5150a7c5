// File: crates/chart-core/src/error.rs
// Summary: Error type for config loading and color parsing.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to read config '{}'", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML config '{}'", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("failed to serialize option object")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
