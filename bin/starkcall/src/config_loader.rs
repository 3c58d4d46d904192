use anyhow::{Context, Result};
use serde::Deserialize;
use starkcall_common::utils::config::load_config_or_default;
use starkcall_common::utils::logging::LoggingConfig;
use starkcall_core::Abi;
use std::path::Path;

/// Settings read from `starkcall.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

pub fn load_app_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    load_config_or_default(path)
}

/// Read a contract ABI from a JSON file
pub fn load_abi<P: AsRef<Path>>(path: P) -> Result<Abi> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read abi file {:?}", path))?;
    Abi::from_json(&raw).with_context(|| format!("Failed to parse abi file {:?}", path))
}
