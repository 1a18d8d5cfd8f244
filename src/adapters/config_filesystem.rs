//! Exec configuration loading from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, ExecConfig, parse_config_content};

/// File names searched in the working directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".prexec.toml", "prexec.toml"];

/// Locate the config file to use, if any.
///
/// An explicit path is resolved against `cwd` and must exist. Without one,
/// the first of [`CONFIG_FILE_NAMES`] present in `cwd` is used.
pub fn find_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>, AppError> {
    if let Some(path) = explicit {
        let path = cwd.join(path);
        if !path.is_file() {
            return Err(AppError::ConfigMissing(path.display().to_string()));
        }
        return Ok(Some(path));
    }

    Ok(CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)).find(|path| path.is_file()))
}

/// Load the exec configuration, falling back to defaults when no file exists.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<ExecConfig, AppError> {
    let Some(path) = find_config(explicit, cwd)? else {
        debug!("no config file found, using defaults");
        return Ok(ExecConfig::default());
    };

    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}
