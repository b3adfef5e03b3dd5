//! Configuration storage adapters.
//!
//! - [`JsonFileConfig`] — a JSON file on the host filesystem.
//! - [`MemoryConfigStore`] — postcard bytes held in memory, the same
//!   encoding an NVS blob would use on a device.
//!
//! Both validate on load and on save.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::SystemConfig;

// ── JSON file ─────────────────────────────────────────────────

pub struct JsonFileConfig {
    path: PathBuf,
}

impl JsonFileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonFileConfig {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("JsonFileConfig: {} not found", self.path.display());
                return Err(ConfigError::NotFound);
            }
            Err(e) => {
                warn!("JsonFileConfig: reading {} failed: {e}", self.path.display());
                return Err(ConfigError::IoError);
            }
        };
        let cfg: SystemConfig = serde_json::from_str(&text).map_err(|e| {
            warn!("JsonFileConfig: {} is not valid config: {e}", self.path.display());
            ConfigError::Corrupted
        })?;
        cfg.validate()?;
        info!("JsonFileConfig: loaded {}", self.path.display());
        Ok(cfg)
    }

    fn save(&mut self, config: &SystemConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let text = serde_json::to_string_pretty(config).map_err(|e| {
            warn!("JsonFileConfig: encode failed: {e}");
            ConfigError::IoError
        })?;
        std::fs::write(&self.path, text).map_err(|e| {
            warn!("JsonFileConfig: writing {} failed: {e}", self.path.display());
            ConfigError::IoError
        })?;
        info!("JsonFileConfig: saved {}", self.path.display());
        Ok(())
    }
}

// ── In-memory (postcard) ──────────────────────────────────────

#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    blob: Option<Vec<u8>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored bytes, if any.
    pub fn blob(&self) -> Option<&[u8]> {
        self.blob.as_deref()
    }

    /// Replace the stored bytes without validation (simulates a corrupted
    /// or externally written blob).
    pub fn set_blob(&mut self, bytes: Vec<u8>) {
        self.blob = Some(bytes);
    }
}

impl ConfigPort for MemoryConfigStore {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        match &self.blob {
            Some(bytes) => {
                let cfg: SystemConfig = postcard::from_bytes(bytes).map_err(|e| {
                    warn!("MemoryConfigStore: stored blob corrupted: {e}");
                    ConfigError::Corrupted
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            None => {
                info!("MemoryConfigStore: no stored config, using defaults");
                Ok(SystemConfig::default())
            }
        }
    }

    fn save(&mut self, config: &SystemConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let bytes = postcard::to_allocvec(config).map_err(|e| {
            warn!("MemoryConfigStore: encode failed: {e}");
            ConfigError::IoError
        })?;
        self.blob = Some(bytes);
        Ok(())
    }
}
