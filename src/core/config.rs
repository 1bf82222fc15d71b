use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir (`~/.config/base85` on Linux).
pub const CONFIG_DIR_NAME: &str = "base85";

/// File name of the user configuration inside [`CONFIG_DIR_NAME`].
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Project-local configuration file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "base85.toml";

/// Effective settings for the `base85` command line tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Maximum input size in bytes (0 = unlimited)
    pub max_size: usize,
    /// Print a newline after encoded output
    pub trailing_newline: bool,
    /// Allow colored error output when stderr is a terminal
    pub color: bool,
    /// Log level used when neither `--log-level` nor `RUST_LOG` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Partial settings as found in a TOML file; unset keys keep their
/// previous value when merged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsOverrides {
    #[serde(default)]
    pub max_size: Option<usize>,
    #[serde(default)]
    pub trailing_newline: Option<bool>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    settings: SettingsOverrides,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_size: 100 * 1024 * 1024,
            trailing_newline: true,
            color: true,
            log_level: None,
        }
    }
}

impl Settings {
    /// Parses a configuration file's content and applies it over the
    /// built-in defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut settings = Self::default();
        settings.merge(parse_overrides(content)?);
        Ok(settings)
    }

    /// Loads the configuration bundled with the crate.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../config.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path, on top of the bundled
    /// defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;
        settings.merge(read_overrides(path)?);
        Ok(settings)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults (from the crate)
    /// 2. `~/.config/base85/config.toml` (user overrides)
    /// 3. `./base85.toml` (project-local overrides)
    ///
    /// Later files override earlier ones key by key. Files that fail to
    /// load are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;

        for path in search_paths() {
            if !path.exists() {
                continue;
            }
            match read_overrides(&path) {
                Ok(overrides) => {
                    log::debug!("loaded config from {:?}", path);
                    settings.merge(overrides);
                }
                Err(e) => {
                    log::warn!("Failed to load config from {:?}: {}", path, e);
                }
            }
        }

        Ok(settings)
    }

    /// Applies every key that is set in `other`.
    pub fn merge(&mut self, other: SettingsOverrides) {
        if let Some(max_size) = other.max_size {
            self.max_size = max_size;
        }
        if let Some(trailing_newline) = other.trailing_newline {
            self.trailing_newline = trailing_newline;
        }
        if let Some(color) = other.color {
            self.color = color;
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }
}

/// Configuration files consulted by [`Settings::load_with_overrides`], in
/// the order they are applied.
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(CONFIG_DIR_NAME).join(USER_CONFIG_FILE));
    }
    paths.push(PathBuf::from(LOCAL_CONFIG_FILE));
    paths
}

fn parse_overrides(content: &str) -> Result<SettingsOverrides, toml::de::Error> {
    let file: ConfigFile = toml::from_str(content)?;
    Ok(file.settings)
}

fn read_overrides(path: &Path) -> Result<SettingsOverrides, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_overrides(&content)?)
}
