use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BridgemapError;
use crate::model::Settings;

const SETTINGS_FILE: &str = "config.toml";

/// The CLI settings file and its parsed contents.
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Open the settings file at `path`, or at the default location.
    /// A missing file yields default settings.
    pub fn open(path: Option<&Path>) -> Result<Self, BridgemapError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_settings_path()?,
        };
        let settings = load_settings(&path)?;
        Ok(Self { path, settings })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn save(&self) -> Result<(), BridgemapError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| BridgemapError::DirCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(&self.settings)?;
        fs::write(&self.path, content).map_err(|source| BridgemapError::FileWrite {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

fn default_settings_path() -> Result<PathBuf, BridgemapError> {
    dirs::config_dir()
        .map(|d| d.join("bridgemap").join(SETTINGS_FILE))
        .ok_or(BridgemapError::ConfigDirNotFound)
}

fn load_settings(path: &Path) -> Result<Settings, BridgemapError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path).map_err(|source| BridgemapError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}
