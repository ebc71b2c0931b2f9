//! This module handles the host application's i18n settings, including
//! loading and saving them to an `intl.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use intl_kit::config::{self, Settings};
//!
//! // Load existing settings
//! let mut settings = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! settings.language = Some("fr".to_string());
//!
//! // Save the modified settings
//! config::save(&settings).expect("Failed to save settings");
//! ```

use crate::error::Result;
use crate::formats::FormatRegistry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "intl.toml";
const APP_NAME: &str = "intl-kit";

/// Declarative i18n settings: the default language, the debug flag for
/// diagnostic error messages, and the named-format registry.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    pub language: Option<String>,
    #[serde(default)]
    pub debug: Option<bool>,
    #[serde(default)]
    pub formats: FormatRegistry,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Settings> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Settings::default())
}

pub fn save(settings: &Settings) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}
