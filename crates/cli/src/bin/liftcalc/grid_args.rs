use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use lift_calculator::config::load_grid;
use lift_calculator::constants::DEFAULT_GRAVITY;
use lift_calculator::presets::grid_from_config;
use lift_calculator::propulsion::{GridSpecifications, ThrusterCount};

/// Grid definition taken either from a file or from individual flags.
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Grid file (YAML list, TOML record, or directory of TOML records); overrides the flags below
    #[arg(long)]
    pub grid: Option<PathBuf>,

    /// Grid mass in kg
    #[arg(long, default_value_t = 1000.0)]
    pub mass: f64,

    /// Local gravity in m/s² (Earth is 9.81)
    #[arg(long, default_value_t = DEFAULT_GRAVITY)]
    pub gravity: f64,

    /// Small atmospheric thrusters
    #[arg(long, default_value_t = 0)]
    pub atmo_small: u32,

    /// Large atmospheric thrusters
    #[arg(long, default_value_t = 0)]
    pub atmo_large: u32,

    /// Small ion thrusters
    #[arg(long, default_value_t = 0)]
    pub ion_small: u32,

    /// Large ion thrusters
    #[arg(long, default_value_t = 0)]
    pub ion_large: u32,

    /// Small hydrogen thrusters
    #[arg(long, default_value_t = 0)]
    pub hydro_small: u32,

    /// Large hydrogen thrusters
    #[arg(long, default_value_t = 0)]
    pub hydro_large: u32,
}

impl GridArgs {
    pub fn to_specifications(&self) -> anyhow::Result<GridSpecifications> {
        if let Some(path) = &self.grid {
            let config = load_grid(path)
                .with_context(|| format!("loading grid from {}", path.display()))?;
            return Ok(grid_from_config(&config)?);
        }
        Ok(GridSpecifications::with_thrusters(
            self.mass,
            self.gravity,
            ThrusterCount::new(self.atmo_small, self.atmo_large),
            ThrusterCount::new(self.ion_small, self.ion_large),
            ThrusterCount::new(self.hydro_small, self.hydro_large),
        )?)
    }
}
