//! Per-user interaction state: the grid being edited and the presets saved so far.
//!
//! A [`Session`] is created when a user arrives and ended when they leave; nothing outlives
//! it. Each interaction recomputes from the current grid.

use lift_presets::{Preset, PresetError, PresetStore};
use lift_propulsion::{GridSpecifications, PerformanceError, PerformanceReport, analyze};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no grid has been entered yet")]
    NoCurrentGrid,
    #[error(transparent)]
    Preset(#[from] PresetError),
    #[error(transparent)]
    Performance(#[from] PerformanceError),
}

#[derive(Debug, Default)]
pub struct Session {
    presets: PresetStore,
    current: Option<GridSpecifications>,
}

impl Session {
    /// Begin a session with an empty preset store.
    pub fn start() -> Self {
        tracing::debug!("session started");
        Self::default()
    }

    pub fn current(&self) -> Option<&GridSpecifications> {
        self.current.as_ref()
    }

    pub fn set_current(&mut self, spec: GridSpecifications) {
        self.current = Some(spec);
    }

    /// Make `spec` current and compute its metrics.
    pub fn calculate(
        &mut self,
        spec: GridSpecifications,
    ) -> Result<PerformanceReport, SessionError> {
        self.current = Some(spec);
        Ok(analyze(&spec)?)
    }

    /// Save the current grid under `name`, overwriting an existing preset of that name.
    pub fn save_preset(&mut self, name: &str) -> Result<(), SessionError> {
        let spec = self.current.ok_or(SessionError::NoCurrentGrid)?;
        self.presets.save(Preset::new(name, spec)?);
        Ok(())
    }

    /// Make the named preset the current grid.
    pub fn load_preset(&mut self, name: &str) -> Result<GridSpecifications, SessionError> {
        let spec = self
            .presets
            .load(name)
            .map(|preset| preset.specifications)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))?;
        self.current = Some(spec);
        Ok(spec)
    }

    pub fn presets(&self) -> &PresetStore {
        &self.presets
    }

    pub fn presets_mut(&mut self) -> &mut PresetStore {
        &mut self.presets
    }

    /// Import a JSON array of preset records.
    pub fn import_presets(&mut self, json: &str) -> Result<usize, SessionError> {
        Ok(self.presets.import_json(json)?)
    }

    pub fn export_presets(&self) -> Result<String, SessionError> {
        Ok(self.presets.to_json()?)
    }

    /// End the session, discarding every preset. Returns how many were dropped.
    pub fn end(mut self) -> usize {
        let dropped = self.presets.len();
        self.presets.clear();
        self.current = None;
        tracing::debug!(dropped, "session ended");
        dropped
    }
}
