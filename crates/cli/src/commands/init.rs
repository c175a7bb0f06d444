//! Initialize .bpname.toml configuration

use anyhow::Result;
use bpname_core::config::CONFIG_FILE_NAME;
use bpname_core::BpnameConfig;
use colored::Colorize;
use std::path::Path;

pub fn run(path: Option<&Path>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| Path::new("."));
    let config_path = target_path.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!(
            "  {}: {} already exists",
            "warn".yellow(),
            config_path.display()
        );
        return Ok(());
    }

    BpnameConfig::default().save(&config_path)?;

    eprintln!("  {} {}", "Created".green(), config_path.display());
    Ok(())
}
