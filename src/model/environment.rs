use serde::{Deserialize, Serialize};

/// Deployment tier that receives a build notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    #[serde(rename = "DEV")]
    Development,
    #[serde(rename = "STAGING")]
    Staging,
    #[serde(rename = "PROD")]
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Self::Development, Self::Staging, Self::Production];
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "DEV"),
            Self::Staging => write!(f, "STAGING"),
            Self::Production => write!(f, "PROD"),
        }
    }
}

/// Release track within an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Channel {
    Stable,
    Nightly,
    Internal,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Self::Stable, Self::Nightly, Self::Internal];
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stable => write!(f, "STABLE"),
            Self::Nightly => write!(f, "NIGHTLY"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}
