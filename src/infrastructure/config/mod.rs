//! Configuration loading for the broker simulator
//!
//! Supports JSON configuration files for:
//! - Server bind address
//! - Ledger settings (starting balance, journal bound)
//! - Quote provider selection (simulated or Alpha Vantage)
//! - Symbol catalog source
//! - Accounts to open at startup

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration for the broker simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// Broker name/identifier
    #[serde(default = "default_broker_name")]
    pub name: String,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Ledger configuration
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Quote provider configuration
    #[serde(default)]
    pub quotes: QuoteConfig,

    /// Symbol catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Accounts to open at startup
    #[serde(default)]
    pub accounts: Vec<String>,
}

fn default_broker_name() -> String {
    "Broker Simulator".to_string()
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            name: default_broker_name(),
            server: ServerConfig::default(),
            ledger: LedgerConfig::default(),
            quotes: QuoteConfig::default(),
            catalog: CatalogConfig::default(),
            accounts: Vec::new(),
        }
    }
}

impl BrokerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Ledger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Cash balance granted to every new account
    #[serde(default = "default_starting_balance")]
    pub starting_balance: Decimal,
    /// Optional bound on the trade journal; unbounded when absent
    #[serde(default)]
    pub journal_capacity: Option<usize>,
}

fn default_starting_balance() -> Decimal {
    dec!(10000.00)
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            journal_capacity: None,
        }
    }
}

/// Which quote provider to wire in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteProvider {
    Simulated,
    AlphaVantage,
}

impl Default for QuoteProvider {
    fn default() -> Self {
        QuoteProvider::Simulated
    }
}

/// Quote provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteConfig {
    #[serde(default)]
    pub provider: QuoteProvider,
    /// API key for the live provider; falls back to ALPHA_VANTAGE_API_KEY
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-quote volatility for the simulated provider, in basis points.
    /// Zero keeps prices fixed.
    #[serde(default = "default_volatility_bps")]
    pub volatility_bps: u32,
}

fn default_volatility_bps() -> u32 {
    25
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            provider: QuoteProvider::default(),
            api_key: None,
            volatility_bps: default_volatility_bps(),
        }
    }
}

impl QuoteConfig {
    /// Resolve the API key from config or environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("ALPHA_VANTAGE_API_KEY").ok())
    }
}

/// Symbol catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a listing-status CSV; the built-in catalog is used when absent
    #[serde(default)]
    pub listing_file: Option<String>,
}

/// Configuration errors
#[derive(Debug, Clone)]
pub enum ConfigError {
    Io { path: String, error: String },
    Parse(String),
    MissingApiKey,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, error } => {
                write!(f, "Failed to read config file '{}': {}", path, error)
            }
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::MissingApiKey => write!(
                f,
                "Quote provider 'alpha_vantage' needs an api_key (or ALPHA_VANTAGE_API_KEY)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let json = r#"{}"#;
        let config = BrokerConfig::from_json(json).unwrap();
        assert_eq!(config.name, "Broker Simulator");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ledger.starting_balance, dec!(10000.00));
        assert_eq!(config.quotes.provider, QuoteProvider::Simulated);
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "name": "Test Broker",
            "server": {
                "host": "127.0.0.1",
                "port": 9000
            },
            "ledger": {
                "starting_balance": "25000.00",
                "journal_capacity": 5000
            },
            "quotes": {
                "provider": "alpha_vantage",
                "api_key": "demo"
            },
            "catalog": {
                "listing_file": "data/listing_status.csv"
            },
            "accounts": ["alice", "bob"]
        }"#;

        let config = BrokerConfig::from_json(json).unwrap();
        assert_eq!(config.name, "Test Broker");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.ledger.starting_balance, dec!(25000.00));
        assert_eq!(config.ledger.journal_capacity, Some(5000));
        assert_eq!(config.quotes.provider, QuoteProvider::AlphaVantage);
        assert_eq!(config.quotes.api_key.as_deref(), Some("demo"));
        assert_eq!(
            config.catalog.listing_file.as_deref(),
            Some("data/listing_status.csv")
        );
        assert_eq!(config.accounts, vec!["alice", "bob"]);
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let err = BrokerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
