use base85::Settings;
use std::path::PathBuf;

use super::global::GlobalArgs;

/// Expands `~` in a user-supplied config path and checks that it names a
/// readable file.
pub fn resolve_config_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let expanded = shellexpand::tilde(path);
    let resolved = PathBuf::from(expanded.as_ref());

    if !resolved.is_file() {
        return Err(format!("Cannot access config file '{}'", path).into());
    }

    Ok(resolved)
}

/// Loads settings from `--config` or the standard locations, then applies
/// command line overrides.
pub fn load_settings(global: &GlobalArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = match &global.config {
        Some(path) => {
            let resolved = resolve_config_path(path)?;
            log::debug!("loading config from {:?}", resolved);
            Settings::load_from_file(&resolved)
                .map_err(|e| format!("Failed to load config '{}': {}", path, e))?
        }
        None => Settings::load_with_overrides()?,
    };

    if let Some(max_size) = global.max_size {
        settings.max_size = max_size;
    }
    if global.no_color {
        settings.color = false;
    }

    Ok(settings)
}
