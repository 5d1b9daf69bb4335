use crate::constant::DEFAULT_CONFIG_FILE_NAME;
use crate::dad_error::DadError;
use dirs::home_dir;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Defaults read from a TOML file. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub organization: Option<String>,
    pub pat: Option<String>,
    pub project: Option<String>,
    pub definition: Option<u32>,
    pub branch: Option<String>,
    pub artifact: Option<String>,
    pub result: Option<String>,
    pub service_url: Option<String>,
}

pub fn get_default_config_file_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE_NAME))
}

impl ConfigFile {
    /// # load
    ///
    /// Load the explicitly named file, or the default one in the home directory.
    ///
    /// A missing default file gives empty defaults. A missing explicit file, or any
    /// file that cannot be parsed, is an error.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, DadError> {
        match explicit_path {
            Some(path) => Self::load_from(path),
            None => match get_default_config_file_path() {
                Some(path) if path.is_file() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, DadError> {
        let invalid = |msg: String| DadError::InvalidConfigFile {
            path: path.to_string_lossy().to_string(),
            msg,
        };

        let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        toml::from_str(&content).map_err(|e| invalid(e.to_string()))
    }
}
