use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    model::AlarmThresholds,
};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const ALARMS_KEY: &str = "alarms";

/// Platform config directory shared by the config and credential files.
pub fn config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("dev", "shipping-weather", "shipping-weather")
        .ok_or(Error::ConfigDirUnavailable)?;

    Ok(dirs.config_dir().to_path_buf())
}

/// Flat JSON document on disk.
///
/// Only the `alarms` key is interpreted; every other key is carried through
/// saves untouched.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `config.json` in the platform config directory.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(config_dir()?.join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, or return an empty one if the file doesn't exist yet.
    pub fn load(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "config file does not exist, using empty config");
                return Ok(Map::new());
            }
            Err(source) => return Err(Error::Io { path: self.path.clone(), source }),
        };

        serde_json::from_str(&contents)
            .map_err(|source| Error::ConfigParse { path: self.path.clone(), source })
    }

    /// Merge `updates` over the existing top-level keys and rewrite the file.
    ///
    /// A malformed existing document is reported and left as it is.
    pub fn save(&self, updates: Map<String, Value>) -> Result<()> {
        let mut doc = self.load()?;
        for (key, value) in updates {
            doc.insert(key, value);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| Error::Io { path: parent.to_path_buf(), source })?;
        }

        let json = serde_json::to_string_pretty(&doc).map_err(Error::ConfigSerialize)?;
        fs::write(&self.path, json)
            .map_err(|source| Error::Io { path: self.path.clone(), source })?;

        debug!(path = %self.path.display(), keys = doc.len(), "config saved");
        Ok(())
    }

    /// Thresholds stored under `alarms`, or the defaults when the key is absent.
    pub fn alarms(&self) -> Result<AlarmThresholds> {
        let doc = self.load()?;
        match doc.get(ALARMS_KEY) {
            None => Ok(AlarmThresholds::default()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|source| Error::ConfigParse { path: self.path.clone(), source }),
        }
    }

    pub fn save_alarms(&self, alarms: &AlarmThresholds) -> Result<()> {
        let value = serde_json::to_value(alarms).map_err(Error::ConfigSerialize)?;

        let mut updates = Map::new();
        updates.insert(ALARMS_KEY.to_string(), value);
        self.save(updates)
    }
}
