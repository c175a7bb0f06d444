//! CLI commands

pub mod init;
pub mod list;
pub mod name;

use anyhow::Result;
use bpname_core::BpnameConfig;

/// Load `.bpname.toml` from the working directory (or an ancestor) and
/// apply its color preference
pub(crate) fn load_config() -> Result<BpnameConfig> {
    let cwd = std::env::current_dir()?;
    let config = BpnameConfig::find_and_load(&cwd)?;
    if !config.output.color {
        colored::control::set_override(false);
    }
    Ok(config)
}
