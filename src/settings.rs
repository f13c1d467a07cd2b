use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::playback::ProjectorConfig;

const ENABLE_LOGS: bool = true;

use crate::log_warn;

/// Knobs for the simulated backend call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MockAnalysisSettings {
    pub delay_ms: u64,
    pub duration_secs: u32,
    /// Prefix of the solid demo moments/suggestions copied into the result
    pub moment_count: usize,
    pub suggestion_count: usize,
}

impl Default for MockAnalysisSettings {
    fn default() -> Self {
        Self {
            delay_ms: 3_000,
            duration_secs: 120,
            moment_count: 3,
            suggestion_count: 3,
        }
    }
}

/// Upload progress ticker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadSettings {
    pub tick_interval_ms: u64,
    pub progress_step: u8,
    /// The ticker stops here; only a finished analysis reaches 100
    pub progress_ceiling: u8,
    /// Pause at 100% before handing the result over
    pub finalize_delay_ms: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 300,
            progress_step: 10,
            progress_ceiling: 90,
            finalize_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub projector: ProjectorConfig,
    pub upload: UploadSettings,
    pub mock_analysis: MockAnalysisSettings,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<AppSettings>,
}

impl SettingsStore {
    /// Missing or unparsable files fall back to defaults.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!(
                    "Ignoring malformed settings at {}: {}",
                    path.display(),
                    err
                );
                AppSettings::default()
            })
        } else {
            AppSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn snapshot(&self) -> AppSettings {
        self.read().clone()
    }

    pub fn projector(&self) -> ProjectorConfig {
        self.read().projector.clone()
    }

    pub fn upload(&self) -> UploadSettings {
        self.read().upload.clone()
    }

    pub fn mock_analysis(&self) -> MockAnalysisSettings {
        self.read().mock_analysis.clone()
    }

    pub fn update(&self, settings: AppSettings) -> Result<()> {
        let mut guard = self
            .data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = settings;
        self.persist(&guard)
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let data: AppSettings = serde_json::from_str(&contents)?;
        let mut guard = self
            .data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = data;
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, AppSettings> {
        self.data
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, data: &AppSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
