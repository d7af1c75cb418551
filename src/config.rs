use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RaceConfig {
    pub laps: u32,
    pub engine: u32,
    pub hand_size: usize,
    pub track_length: usize,
    // Track positions of the corners
    pub corners: Vec<usize>,
    pub max_rounds: u32,
    pub seed: Option<u64>,
    pub log_dir: String,
}

impl Default for RaceConfig {
    fn default() -> Self {
        RaceConfig {
            laps: 2,
            engine: 6,
            hand_size: 7,
            track_length: 48,
            corners: vec![10, 22, 34],
            max_rounds: 100,
            seed: None,
            log_dir: "./logs".to_string(),
        }
    }
}

impl RaceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Unset or empty keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RaceConfig::default();
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Ok(RaceConfig {
            laps: parse_or(&get, "RACE_LAPS", defaults.laps)?,
            engine: parse_or(&get, "RACE_ENGINE", defaults.engine)?,
            hand_size: parse_or(&get, "RACE_HAND_SIZE", defaults.hand_size)?,
            track_length: parse_or(&get, "RACE_TRACK_LENGTH", defaults.track_length)?,
            corners: match get("RACE_CORNERS") {
                Some(value) => value
                    .split(',')
                    .map(|c| parse("RACE_CORNERS", c.trim()))
                    .collect::<Result<Vec<usize>, ConfigError>>()?,
                None => defaults.corners,
            },
            max_rounds: parse_or(&get, "RACE_MAX_ROUNDS", defaults.max_rounds)?,
            seed: get("RACE_SEED")
                .map(|v| parse("RACE_SEED", &v))
                .transpose()?,
            log_dir: get("RACE_LOG_DIR").unwrap_or(defaults.log_dir),
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn parse_or<T, F>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => parse(key, &value),
        None => Ok(default),
    }
}
