//! Init command implementation.
//!
//! Writes a default `swiftlex.toml` so the available settings are visible
//! and editable.

use std::path::PathBuf;

use tracing::info;

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{CliError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write the configuration into; the current directory
    /// when unset.
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Run the init command and return the path of the written file.
pub fn run_init(args: &InitArgs) -> Result<PathBuf> {
    let dir = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::Validation(format!(
            "Target path is not a directory: {}",
            dir.display()
        )));
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !args.force {
        return Err(CliError::Validation(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    Config::default().save_to_path(&config_path)?;
    info!(path = %config_path.display(), "created configuration");
    Ok(config_path)
}
