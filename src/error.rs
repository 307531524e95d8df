use std::path::PathBuf;
use thiserror::Error;

use crate::model::BridgeType;

#[derive(Debug, Error)]
pub enum BridgemapError {
    #[error("no notification targets defined for '{bridge}'")]
    MissingNotificationConfig { bridge: BridgeType },

    #[error("malformed image template for '{bridge}': {reason}")]
    MalformedTemplate { bridge: BridgeType, reason: String },

    #[error("unknown bridge type '{0}'")]
    UnknownBridge(String),

    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory: {path}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("failed to determine config directory; set XDG_CONFIG_HOME or --config")]
    ConfigDirNotFound,
}
