//! 配置持久化：`ScratchConfig` <-> `scratch_config.json`
//!
//! 读取失败时退回默认配置，不把解析错误带进内核。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::app_dirs::get_settings_dir;
use crate::kernel::services::ports::ScratchConfigRecord;
use crate::kernel::{Effect, ScratchConfig};

const SETTINGS_FILE: &str = "scratch_config.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot determine settings directory")]
    NoSettingsDir,
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_settings_dir().map(|dir| dir.join(SETTINGS_FILE))
}

pub struct ConfigPersistence {
    path: PathBuf,
}

impl ConfigPersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default_location() -> Result<Self, SettingsError> {
        get_settings_path()
            .map(Self::new)
            .ok_or(SettingsError::NoSettingsDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn load_record(&self) -> Result<Option<ScratchConfigRecord>, SettingsError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&data)
            .map(Some)
            .map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    pub fn load(&self) -> Result<ScratchConfig, SettingsError> {
        Ok(self
            .load_record()?
            .map(ScratchConfig::from_record)
            .unwrap_or_default())
    }

    pub fn load_or_default(&self) -> ScratchConfig {
        match self.load() {
            Ok(config) => {
                tracing::info!(
                    path = %self.path.display(),
                    scratches = config.scratches().len(),
                    "scratch config loaded"
                );
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default scratch config");
                ScratchConfig::DEFAULT
            }
        }
    }

    pub fn save(&self, config: &ScratchConfig) -> Result<(), SettingsError> {
        self.save_record(&config.to_record())
    }

    /// Writes to a sibling temp file first so a crash never leaves a
    /// truncated config behind.
    pub fn save_record(&self, record: &ScratchConfigRecord) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(record)?;
        let io_err = |source| SettingsError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        tracing::debug!(path = %self.path.display(), "scratch config saved");
        Ok(())
    }

    /// Saves the newest `PersistConfig` among `effects`, if any.
    pub fn persist_effects(&self, effects: &[Effect]) -> Result<bool, SettingsError> {
        let latest = effects.iter().rev().find_map(|effect| match effect {
            Effect::PersistConfig(record) => Some(record),
            _ => None,
        });
        match latest {
            Some(record) => self.save_record(record).map(|()| true),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
