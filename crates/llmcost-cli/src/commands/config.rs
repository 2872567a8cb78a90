use anyhow::Result;
use llmcost_config::{CONFIG_ENV, Config};
use std::path::Path;

use crate::cli::ConfigCommands;

pub fn handle(cmd: ConfigCommands, explicit: Option<&Path>) -> Result<()> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);

    match cmd {
        ConfigCommands::Path => {
            println!("{}", path.display());
            if explicit.is_none() {
                println!("  (override with --config or {})", CONFIG_ENV);
            }
            Ok(())
        }
        ConfigCommands::Show => {
            let config = Config::resolve(explicit)?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to(&path)?;
            println!("✓ Wrote {}", path.display());
            Ok(())
        }
    }
}
