//! Implementation of the `palaver init` command.
//!
//! Writes a configuration file holding every default, ready to edit.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{PalaverError, Result};
use crate::persistence::atomic_write_file;
use std::path::Path;

/// Execute the `palaver init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    write_default_config(&args.config)?;
    println!("Wrote default configuration to {}", args.config.display());
    Ok(())
}

/// Write the default config to `path`, refusing to overwrite.
pub(crate) fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(PalaverError::UserError(format!(
            "config file '{}' already exists; remove it first to regenerate",
            path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    atomic_write_file(path, &yaml)
}
