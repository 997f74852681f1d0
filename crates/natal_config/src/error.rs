use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or interpreting a configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
    #[error("unknown body in [chart] bodies: {0:?}")]
    UnknownBody(String),
}
