use std::{fs, path::Path};

use tracing::info;

use crate::config::Config;
use crate::{AppError, Result};

/// Writes the default configuration to `path`, creating parent directories.
pub fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::io(e, parent))?;
    }

    let contents = toml::to_string_pretty(&Config::default()).map_err(|e| {
        AppError::ConfigValidation {
            component: "default config".to_string(),
            details: e.to_string(),
        }
    })?;

    fs::write(path, format!("# wpa configuration file\n\n{contents}"))
        .map_err(|e| AppError::io(e, path))?;

    info!("Created default configuration at {}", path.display());
    Ok(())
}
