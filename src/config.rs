use crate::ring::WriteMode;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug, Clone)]
pub struct PumpConfig {
    #[serde(default = "defaults::capacity")]
    pub capacity: usize,
    #[serde(default = "defaults::chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "defaults::drain_chunk")]
    pub drain_chunk: usize,
    #[serde(default = "defaults::write_mode", with = "WriteModeDef")]
    pub write_mode: WriteMode,
    #[serde(default = "defaults::report_interval_secs")]
    pub report_interval_secs: u64,
    #[serde(default = "defaults::tick_millis")]
    pub tick_millis: u64,
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

#[allow(dead_code)]
#[derive(Deserialize)]
#[serde(remote = "WriteMode", rename_all = "snake_case")]
enum WriteModeDef {
    NoCover,
    Cover,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

mod defaults {
    use crate::ring::WriteMode;

    pub fn capacity() -> usize {
        1 << 16
    }

    pub fn chunk_size() -> usize {
        4096
    }

    pub fn drain_chunk() -> usize {
        1024
    }

    pub fn write_mode() -> WriteMode {
        WriteMode::NoCover
    }

    pub fn report_interval_secs() -> u64 {
        5
    }

    pub fn tick_millis() -> u64 {
        10
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

impl Default for PumpConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::capacity(),
            chunk_size: defaults::chunk_size(),
            drain_chunk: defaults::drain_chunk(),
            write_mode: defaults::write_mode(),
            report_interval_secs: defaults::report_interval_secs(),
            tick_millis: defaults::tick_millis(),
            log_level: defaults::log_level(),
        }
    }
}

impl PumpConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: PumpConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_zero = [
            ("capacity", self.capacity as u64),
            ("chunk_size", self.chunk_size as u64),
            ("drain_chunk", self.drain_chunk as u64),
            ("report_interval_secs", self.report_interval_secs),
        ];
        for (field, value) in non_zero {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }
        Ok(())
    }
}
