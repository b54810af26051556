//! Subcommand handlers and config loading for the binary.

use std::path::Path;

use super::args::ConfigAction;
use crate::config::{default_path, Config, DEFAULT_CONFIG};

/// Load the config file.
///
/// An explicit `--config` path must exist and parse. The default path falls
/// back to built-in defaults with a warning when it can't be read.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, String> {
    match explicit {
        Some(path) => Config::load_from_explicit(path).map_err(|e| e.to_string()),
        None => match Config::load() {
            Ok(c) => Ok(c),
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Ok(Config::default())
            }
        },
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, explicit: Option<&Path>) -> Result<(), String> {
    let config_path = explicit.map(Path::to_path_buf).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = load_config(explicit)?;
            let rendered = toml::to_string_pretty(&config).map_err(|e| e.to_string())?;

            println!("Current configuration:");
            println!();
            print!("{}", rendered);
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(format!(
                    "Config file already exists: {}\nUse 'ascii-grid config show' to view current settings.",
                    config_path.display()
                ));
            }

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Error creating config directory: {}", e))?;
            }

            std::fs::write(&config_path, DEFAULT_CONFIG)
                .map_err(|e| format!("Error writing config file: {}", e))?;

            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}
