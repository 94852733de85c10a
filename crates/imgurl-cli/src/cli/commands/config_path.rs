//! `imgurl config-path` – where config.toml lives.

use anyhow::Result;
use imgurl_core::config;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
