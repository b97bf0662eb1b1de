use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::{DEFAULT_BET, MAX_STARTING_CHIPS, STARTING_CHIPS};

/// Environment variable naming a TOML file with table settings.
pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";
pub const STARTING_CHIPS_ENV: &str = "HOLDEM_STARTING_CHIPS";
pub const BET_UNIT_ENV: &str = "HOLDEM_BET_UNIT";
pub const SEED_ENV: &str = "HOLDEM_SEED";
pub const POLICY_ENV: &str = "HOLDEM_POLICY";

/// Table settings for a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Chips each side starts with
    pub starting_chips: u32,
    /// Default bet and raise size offered to the player
    pub bet_unit: u32,
    /// Shuffle seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
    /// Name of the computer policy (see [`crate::policy::create_policy`])
    pub policy: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            bet_unit: DEFAULT_BET,
            seed: None,
            policy: "call_when_able".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub bet_unit: ValueSource,
    pub seed: ValueSource,
    pub policy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            bet_unit: ValueSource::Default,
            seed: ValueSource::Default,
            policy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: TableConfig,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    bet_unit: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    policy: Option<String>,
}

impl TableConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(s)?;
        let mut cfg = TableConfig::default();
        apply_file(&mut cfg, &mut ConfigSources::default(), file);
        validate(&cfg)?;
        Ok(cfg)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

pub fn load() -> Result<TableConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves settings from defaults, then the file named by `HOLDEM_CONFIG`,
/// then individual `HOLDEM_*` variables. Later layers win; empty variables are
/// ignored.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = TableConfig::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env_value(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        apply_file(&mut cfg, &mut sources, f);
    }

    if let Some(v) = env_value(STARTING_CHIPS_ENV) {
        cfg.starting_chips = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting chips".into()))?;
        sources.starting_chips = ValueSource::Env;
    }
    if let Some(v) = env_value(BET_UNIT_ENV) {
        cfg.bet_unit = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bet unit".into()))?;
        sources.bet_unit = ValueSource::Env;
    }
    if let Some(v) = env_value(SEED_ENV) {
        cfg.seed = Some(
            v.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value(POLICY_ENV) {
        cfg.policy = v;
        sources.policy = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn apply_file(cfg: &mut TableConfig, sources: &mut ConfigSources, f: FileConfig) {
    if let Some(v) = f.starting_chips {
        cfg.starting_chips = v;
        sources.starting_chips = ValueSource::File;
    }
    if let Some(v) = f.bet_unit {
        cfg.bet_unit = v;
        sources.bet_unit = ValueSource::File;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
    if let Some(v) = f.policy {
        cfg.policy = v;
        sources.policy = ValueSource::File;
    }
}

fn validate(cfg: &TableConfig) -> Result<(), ConfigError> {
    if cfg.starting_chips == 0 {
        return Err(ConfigError::Invalid("starting_chips must be >0".into()));
    }
    if cfg.starting_chips > MAX_STARTING_CHIPS {
        return Err(ConfigError::Invalid(format!(
            "starting_chips must be <= {}",
            MAX_STARTING_CHIPS
        )));
    }
    if cfg.bet_unit == 0 {
        return Err(ConfigError::Invalid("bet_unit must be >0".into()));
    }
    if cfg.policy.trim().is_empty() {
        return Err(ConfigError::Invalid("policy must not be empty".into()));
    }
    Ok(())
}
