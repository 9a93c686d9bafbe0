use std::path::PathBuf;

/// Errors that can occur when loading, saving, or validating the config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors raised while loading or validating a precache manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("manifest cache name is empty")]
    EmptyCacheName,

    #[error("url `{0}` is not an absolute path")]
    RelativeUrl(String),

    #[error("url `{0}` contains a `..` segment")]
    ParentSegment(String),

    #[error("url `{0}` encodes a path separator")]
    EncodedSeparator(String),

    #[error("route target `{0}` is outside the asset root")]
    RouteOutsideRoot(String),

    #[error("url `{0}` is listed more than once")]
    DuplicateUrl(String),
}

/// Top-level error for the run loop and the terminal host.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}
