use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    config::config_dir,
    error::{Error, Result},
};

pub const API_KEY_FILE_NAME: &str = "api_key.txt";

/// `api_key.txt` in the platform config directory.
pub fn default_api_key_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(API_KEY_FILE_NAME))
}

/// Read the OpenWeather API key, trimming surrounding whitespace.
pub fn load_api_key(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents.trim().to_string()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(Error::CredentialMissing { path: path.to_path_buf() })
        }
        Err(source) => Err(Error::Io { path: path.to_path_buf(), source }),
    }
}
