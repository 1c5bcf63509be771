//! Configuration file handling for woolfall.
//!
//! The config lives at `<config dir>/woolfall/config.toml`. Every key is
//! optional; a missing file means defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use log::info;
use woolfall_core::FieldConfig;

const APP_NAME: &str = "woolfall";
const CONFIG_FILE: &str = "config.toml";

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Path of the config file, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Directory for runtime data such as the log file.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

/// Load and validate the configuration from the platform config path.
pub fn load() -> Result<(FieldConfig, ConfigSource)> {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            info!("no config directory on this platform, using defaults");
            Ok((FieldConfig::default(), ConfigSource::Defaults))
        }
    }
}

/// Load and validate the configuration at `path`, falling back to defaults
/// when the file does not exist.
pub fn load_from(path: &Path) -> Result<(FieldConfig, ConfigSource)> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("{} not found, using defaults", path.display());
            return Ok((FieldConfig::default(), ConfigSource::Defaults));
        }
        Err(err) => {
            return Err(err).wrap_err_with(|| format!("failed to read {}", path.display()));
        }
    };

    let config =
        parse(&contents).wrap_err_with(|| format!("invalid config file {}", path.display()))?;
    info!("loaded config from {}", path.display());
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

/// Parse and validate TOML config contents.
pub fn parse(contents: &str) -> Result<FieldConfig> {
    let config: FieldConfig = toml::from_str(contents).wrap_err("failed to parse TOML")?;
    config.validate()?;
    Ok(config)
}
