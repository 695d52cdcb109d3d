//! Parses config file

use std::{
    env,
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use eyre::eyre;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "sprthumb.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target width of every preview
    pub width: u32,
    /// Appended to the sprite file stem
    pub suffix: String,
    /// Descend into sub-folders in batch mode
    pub recursive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 256,
            suffix: "_thumb".to_string(),
            recursive: false,
        }
    }
}

/// `sprthumb.toml` next to the executable
pub fn default_config_path() -> PathBuf {
    match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|parent| parent.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    }
}

pub fn parse_config_str(s: &str) -> eyre::Result<Config> {
    let config: Config = toml::from_str(s)?;

    if config.width == 0 {
        return Err(eyre!("width must be at least 1"));
    }

    Ok(config)
}

pub fn parse_config(path: &Path) -> eyre::Result<Config> {
    let mut file = OpenOptions::new().read(true).open(path)?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    parse_config_str(&buffer)
}

/// An explicit path must exist. The default one may be missing.
pub fn load_config(path: Option<&Path>) -> eyre::Result<Config> {
    if let Some(path) = path {
        return parse_config(path);
    }

    let path = default_config_path();

    if path.is_file() {
        log::debug!("reading config {}", path.display());
        parse_config(&path)
    } else {
        Ok(Config::default())
    }
}
