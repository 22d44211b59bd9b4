//! Init command implementation

use anyhow::{Result, bail};

use rostr::config::Config;

/// Write a default config file at ~/.rostr/config.toml.
pub fn init_command(force: bool) -> Result<()> {
    let config_path = Config::global_config_path();

    if config_path.exists() && !force {
        bail!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    Config::default().save_to_file(&config_path)?;
    println!("Created {}", config_path.display());
    println!("Edit [settings.api] base_url to point at your backend.");
    Ok(())
}
