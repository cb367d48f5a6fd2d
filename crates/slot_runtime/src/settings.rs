//! Settings management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use slot_core::TableConfig;
use std::path::Path;

/// Runtime settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub table: TableConfig,
    pub workload: WorkloadSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadSettings {
    /// Values inserted during the fill phase.
    pub values: usize,
    /// Every `drain_stride`-th value is removed during the drain phase.
    pub drain_stride: usize,
}

impl Default for WorkloadSettings {
    fn default() -> Self {
        Self {
            values: 10_000,
            drain_stride: 3,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing settings in {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(text)?;
        anyhow::ensure!(
            settings.workload.drain_stride > 0,
            "workload.drain_stride must be positive"
        );
        Ok(settings)
    }
}
