//! Named grid presets and the in-memory store that holds them for one session.

use lift_config::{GridConfig, PresetConfig, ThrusterCountConfig};
use lift_propulsion::{GridSpecifications, PerformanceError, ThrusterCount};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset name must not be empty")]
    EmptyName,
    #[error("preset '{0}' not found")]
    NotFound(String),
    #[error("invalid preset record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid grid in preset: {0}")]
    Grid(#[from] PerformanceError),
}

/// A grid saved under a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub specifications: GridSpecifications,
}

impl Preset {
    pub fn new(
        name: impl Into<String>,
        specifications: GridSpecifications,
    ) -> Result<Self, PresetError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PresetError::EmptyName);
        }
        Ok(Self {
            name,
            specifications,
        })
    }

    /// Serialize to the `{name, specifications}` JSON record.
    pub fn to_json(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(data: &str) -> Result<Self, PresetError> {
        let preset: Preset = serde_json::from_str(data)?;
        Self::new(preset.name, preset.specifications)
    }

    /// Build a preset from a catalog entry.
    pub fn from_config(config: &PresetConfig) -> Result<Self, PresetError> {
        Self::new(config.name.clone(), grid_from_config(&config.grid)?)
    }
}

/// Convert a parsed grid file into validated specifications.
pub fn grid_from_config(config: &GridConfig) -> Result<GridSpecifications, PerformanceError> {
    fn count(c: ThrusterCountConfig) -> ThrusterCount {
        ThrusterCount::new(c.small, c.large)
    }
    GridSpecifications::with_thrusters(
        config.mass_kg,
        config.gravity_m_s2,
        count(config.atmospheric),
        count(config.ion),
        count(config.hydrogen),
    )
}

/// Presets keyed by name, kept in the order they were first saved.
///
/// A store belongs to exactly one session and is never shared.
#[derive(Debug, Clone, Default)]
pub struct PresetStore {
    presets: Vec<Preset>,
}

impl PresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a preset, replacing any existing preset of the same name in place.
    pub fn save(&mut self, preset: Preset) {
        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => {
                tracing::debug!(name = %preset.name, "overwriting preset");
                *existing = preset;
            }
            None => {
                tracing::debug!(name = %preset.name, "saving preset");
                self.presets.push(preset);
            }
        }
    }

    pub fn load(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn remove(&mut self, name: &str) -> Result<Preset, PresetError> {
        let idx = self
            .presets
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))?;
        Ok(self.presets.remove(idx))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn clear(&mut self) {
        self.presets.clear();
    }

    /// Serialize every preset as a JSON array of records.
    pub fn to_json(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string_pretty(&self.presets)?)
    }

    /// Parse a JSON array of records and save each one. Returns how many were imported.
    ///
    /// Every record is validated before any is saved; on error the store is unchanged.
    pub fn import_json(&mut self, data: &str) -> Result<usize, PresetError> {
        let records: Vec<Preset> = serde_json::from_str(data)?;
        let presets = records
            .into_iter()
            .map(|record| Preset::new(record.name, record.specifications))
            .collect::<Result<Vec<_>, _>>()?;
        let count = presets.len();
        for preset in presets {
            self.save(preset);
        }
        Ok(count)
    }
}
