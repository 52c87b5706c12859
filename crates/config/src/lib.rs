//! Configuration models and loaders for the Grid Lift Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use lift_core::constants::DEFAULT_GRAVITY;
use serde::Deserialize;
use thiserror::Error;

/// Thruster counts as written in grid files.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ThrusterCountConfig {
    pub small: u32,
    pub large: u32,
}

/// Grid description parsed from YAML or TOML.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GridConfig {
    pub mass_kg: f64,
    #[serde(default = "default_gravity")]
    pub gravity_m_s2: f64,
    #[serde(default)]
    pub atmospheric: ThrusterCountConfig,
    #[serde(default)]
    pub ion: ThrusterCountConfig,
    #[serde(default)]
    pub hydrogen: ThrusterCountConfig,
}

/// Named grid in a preset catalog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PresetConfig {
    pub name: String,
    #[serde(flatten)]
    pub grid: GridConfig,
}

/// Settings for the OpenAI-compatible chat completion endpoint.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AssistantSettings {
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

fn default_gravity() -> f64 {
    DEFAULT_GRAVITY
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{0} contains no grid definition")]
    Empty(PathBuf),
}

/// Load grid definitions from a YAML list, a single TOML record, or a directory of TOML files.
pub fn load_grids<P: AsRef<Path>>(path: P) -> Result<Vec<GridConfig>, ConfigError> {
    load_records(path)
}

/// Load the first grid definition found at `path`.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<GridConfig, ConfigError> {
    let path = path.as_ref();
    load_grids(path)?
        .into_iter()
        .next()
        .ok_or_else(|| ConfigError::Empty(path.to_path_buf()))
}

/// Load a catalog of named grids.
pub fn load_preset_configs<P: AsRef<Path>>(path: P) -> Result<Vec<PresetConfig>, ConfigError> {
    load_records(path)
}

/// Load advisory service settings from a TOML or YAML file.
pub fn load_assistant_settings<P: AsRef<Path>>(path: P) -> Result<AssistantSettings, ConfigError> {
    let path = path.as_ref();
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
