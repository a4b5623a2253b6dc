//! Layered configuration: defaults, then a TOML file named by
//! `HIGHCARD_CONFIG`, then `HIGHCARD_*` environment variables, then
//! command-line flags. Every value remembers where it came from.

use highcard_engine::rules::TieRule;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const ENV_CONFIG: &str = "HIGHCARD_CONFIG";
pub const ENV_SEED: &str = "HIGHCARD_SEED";
pub const ENV_STARTING_BALANCE: &str = "HIGHCARD_STARTING_BALANCE";
pub const ENV_BET: &str = "HIGHCARD_BET";
pub const ENV_TIE_RULE: &str = "HIGHCARD_TIE_RULE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: u64,
    pub bet: u64,
    pub seed: Option<u64>,
    pub tie_rule: TieRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_balance: 100,
            bet: 10,
            seed: None,
            tie_rule: TieRule::SuitBreaks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_balance: ValueSource,
    pub bet: ValueSource,
    pub seed: ValueSource,
    pub tie_rule: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            bet: ValueSource::Default,
            seed: ValueSource::Default,
            tie_rule: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given on the command line; `None` leaves the resolved value alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub starting_balance: Option<u64>,
    pub bet: Option<u64>,
    pub seed: Option<u64>,
    pub tie_rule: Option<TieRule>,
}

impl ConfigResolved {
    pub fn apply(&mut self, overrides: Overrides) -> Result<(), ConfigError> {
        if let Some(v) = overrides.starting_balance {
            self.config.starting_balance = v;
            self.sources.starting_balance = ValueSource::Cli;
        }
        if let Some(v) = overrides.bet {
            self.config.bet = v;
            self.sources.bet = ValueSource::Cli;
        }
        if let Some(v) = overrides.seed {
            self.config.seed = Some(v);
            self.sources.seed = ValueSource::Cli;
        }
        if let Some(v) = overrides.tie_rule {
            self.config.tie_rule = v;
            self.sources.tie_rule = ValueSource::Cli;
        }
        validate(&self.config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves configuration reading variables through `env`.
pub fn load_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = var(ENV_CONFIG) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.bet {
            cfg.bet = v;
            sources.bet = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.tie_rule {
            cfg.tie_rule = v;
            sources.tie_rule = ValueSource::File;
        }
    }

    if let Some(seed) = var(ENV_SEED) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {ENV_SEED}: {seed}")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(balance) = var(ENV_STARTING_BALANCE) {
        cfg.starting_balance = balance.parse().map_err(|_| {
            ConfigError::Invalid(format!("Invalid {ENV_STARTING_BALANCE}: {balance}"))
        })?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Some(bet) = var(ENV_BET) {
        cfg.bet = bet
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {ENV_BET}: {bet}")))?;
        sources.bet = ValueSource::Env;
    }
    if let Some(rule) = var(ENV_TIE_RULE) {
        cfg.tie_rule = rule
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("Invalid {ENV_TIE_RULE}: {e}")))?;
        sources.tie_rule = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_balance: Option<u64>,
    #[serde(default)]
    bet: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    tie_rule: Option<TieRule>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_balance == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_balance must be >0".into(),
        ));
    }
    if cfg.bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: bet must be >0".into(),
        ));
    }
    Ok(())
}
