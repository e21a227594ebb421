use crate::domain::{ChainId, PriorityTable, SENTINEL_PRIORITY};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub wallet_api_url: String,
    pub price_api_url: String,
    /// Chain priority overrides; empty means the built-in table.
    pub chain_priorities: Vec<(ChainId, i32)>,
    /// Wallets aggregated by the portfolio endpoint.
    pub watch_wallets: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let wallet_api_url = env_map
            .get("WALLET_API_URL")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("WALLET_API_URL".to_string()))?;

        let price_api_url = env_map
            .get("PRICE_API_URL")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("PRICE_API_URL".to_string()))?;

        let chain_priorities = parse_chain_priorities_from_map(&env_map)?;
        let watch_wallets = parse_watch_wallets_from_map(&env_map);

        Ok(Config {
            port,
            wallet_api_url,
            price_api_url,
            chain_priorities,
            watch_wallets,
        })
    }

    /// Build the priority table: configured overrides, or the built-ins.
    pub fn priority_table(&self) -> PriorityTable {
        if self.chain_priorities.is_empty() {
            PriorityTable::default()
        } else {
            PriorityTable::from_pairs(self.chain_priorities.iter().cloned())
        }
    }
}

/// Parse `CHAIN_PRIORITIES` entries of the form `Name=priority,...`.
///
/// Priorities at or below the sentinel are rejected: they would make a
/// configured chain indistinguishable from an unrecognized one.
#[cfg_attr(not(test), allow(dead_code))]
fn parse_chain_priorities_from_map(
    env_map: &HashMap<String, String>,
) -> Result<Vec<(ChainId, i32)>, ConfigError> {
    let Some(raw) = env_map.get("CHAIN_PRIORITIES") else {
        return Ok(Vec::new());
    };

    let mut pairs = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (name, value) = entry.split_once('=').ok_or_else(|| {
            ConfigError::InvalidValue(
                "CHAIN_PRIORITIES".to_string(),
                format!("entry must be Name=priority, got {}", entry),
            )
        })?;

        let chain = ChainId::new(name).map_err(|e| {
            ConfigError::InvalidValue("CHAIN_PRIORITIES".to_string(), e.to_string())
        })?;

        let priority = value.trim().parse::<i32>().map_err(|_| {
            ConfigError::InvalidValue(
                "CHAIN_PRIORITIES".to_string(),
                format!("priority must be an integer, got {}", value),
            )
        })?;

        if priority <= SENTINEL_PRIORITY {
            return Err(ConfigError::InvalidValue(
                "CHAIN_PRIORITIES".to_string(),
                format!(
                    "priority for {} must be greater than {}, got {}",
                    chain, SENTINEL_PRIORITY, priority
                ),
            ));
        }

        pairs.push((chain, priority));
    }

    Ok(pairs)
}

#[cfg_attr(not(test), allow(dead_code))]
fn parse_watch_wallets_from_map(env_map: &HashMap<String, String>) -> Vec<String> {
    env_map
        .get("WATCH_WALLETS")
        .map(|s| {
            s.split(',')
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
