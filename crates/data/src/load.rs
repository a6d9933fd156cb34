use anyhow::{bail, Context};
use blackjack_core::{TableConfig, MAX_BANK};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when no path is given.
pub const CONFIG_ENV: &str = "BLACKJACK_CONFIG";

pub const TABLE_CONFIG_FILE: &str = "table.json";

pub fn load_table_config(path: &Path) -> anyhow::Result<TableConfig> {
    let config: TableConfig = load_json(path)?;
    validate_table_config(&config).with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

/// Explicit path first, then `BLACKJACK_CONFIG`, then built-in defaults.
pub fn load_table_config_or_default(path: Option<&Path>) -> anyhow::Result<TableConfig> {
    if let Some(path) = path {
        return load_table_config(path);
    }
    match config_path_from_env() {
        Some(path) => {
            log::debug!("loading table config from {CONFIG_ENV}={}", path.display());
            load_table_config(&path)
        }
        None => Ok(TableConfig::default()),
    }
}

pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn validate_table_config(config: &TableConfig) -> anyhow::Result<()> {
    if config.player_name.trim().is_empty() {
        bail!("player_name cannot be empty");
    }
    if config.starting_bank < 0 {
        bail!("starting_bank must not be negative, got {}", config.starting_bank);
    }
    if config.min_bet < 1 {
        bail!("min_bet must be at least 1, got {}", config.min_bet);
    }
    if config.house_bank < 0 {
        bail!("house_bank must not be negative, got {}", config.house_bank);
    }
    if config.starting_bank > MAX_BANK {
        bail!("starting_bank {} exceeds the limit of {MAX_BANK}", config.starting_bank);
    }
    if config.house_bank > MAX_BANK {
        bail!("house_bank {} exceeds the limit of {MAX_BANK}", config.house_bank);
    }
    let ratio = config.natural_payout;
    if ratio.denominator == 0 {
        bail!("natural_payout denominator cannot be zero");
    }
    if !ratio.at_least_even_money() {
        bail!(
            "natural_payout {}/{} pays less than an even-money win",
            ratio.numerator,
            ratio.denominator
        );
    }
    if config.starting_bank < config.min_bet {
        log::warn!(
            "starting bank {} cannot cover the minimum bet {}",
            config.starting_bank,
            config.min_bet
        );
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
