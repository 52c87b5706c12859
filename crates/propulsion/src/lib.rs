//! Thruster descriptors, grid specifications, and the lift performance model.

pub mod performance;

use lift_core::SizeClass;
use lift_core::constants::DEFAULT_GRAVITY;
use lift_core::format::format_number;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use performance::{
    PerformanceReport, ThrustBreakdown, analyze, hover_thrust, lift_capacity, thrust_by_type,
    thrust_to_weight_ratio, total_thrust,
};

/// Propulsion technologies available to a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropulsionType {
    /// Works only inside an atmosphere.
    Atmospheric,
    /// Works best in vacuum.
    Ion,
    /// Works everywhere but burns fuel.
    Hydrogen,
}

impl PropulsionType {
    /// All propulsion types in evaluation order.
    pub const ALL: [PropulsionType; 3] = [Self::Atmospheric, Self::Ion, Self::Hydrogen];

    /// Lowercase identifier used in tables and serialized records.
    pub fn key(self) -> &'static str {
        match self {
            Self::Atmospheric => "atmospheric",
            Self::Ion => "ion",
            Self::Hydrogen => "hydrogen",
        }
    }

    /// Human-readable label for reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Atmospheric => "Atmospheric",
            Self::Ion => "Ion",
            Self::Hydrogen => "Hydrogen",
        }
    }

    /// Force table entry for this propulsion type.
    pub fn spec(self) -> &'static ThrusterSpec {
        match self {
            Self::Atmospheric => &THRUSTER_SPECS[0],
            Self::Ion => &THRUSTER_SPECS[1],
            Self::Hydrogen => &THRUSTER_SPECS[2],
        }
    }

    /// Force of a single thruster of this type and size (N).
    pub fn force_newtons(self, size: SizeClass) -> f64 {
        self.spec().force_newtons(size)
    }

    /// Per-unit forces as shown next to thruster inputs.
    pub fn tooltip(self) -> String {
        let spec = self.spec();
        format!(
            "Small: {}N each\nLarge: {}N each",
            format_number(spec.small_newtons),
            format_number(spec.large_newtons)
        )
    }
}

/// Static force-per-unit entry of the thruster table.
#[derive(Debug, Clone, Copy)]
pub struct ThrusterSpec {
    pub small_newtons: f64,
    pub large_newtons: f64,
}

impl ThrusterSpec {
    pub fn force_newtons(&self, size: SizeClass) -> f64 {
        match size {
            SizeClass::Small => self.small_newtons,
            SizeClass::Large => self.large_newtons,
        }
    }
}

/// Thruster force table in newtons, in [`PropulsionType::ALL`] order.
pub const THRUSTER_SPECS: [ThrusterSpec; 3] = [
    ThrusterSpec {
        small_newtons: 82_000.0,
        large_newtons: 408_000.0,
    },
    ThrusterSpec {
        small_newtons: 14_400.0,
        large_newtons: 172_800.0,
    },
    ThrusterSpec {
        small_newtons: 98_400.0,
        large_newtons: 478_800.0,
    },
];

/// Number of thrusters of one propulsion type, split by size class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrusterCount {
    pub small: u32,
    pub large: u32,
}

impl ThrusterCount {
    pub fn new(small: u32, large: u32) -> Self {
        Self { small, large }
    }

    /// Count for a single size class.
    pub fn get(&self, size: SizeClass) -> u32 {
        match size {
            SizeClass::Small => self.small,
            SizeClass::Large => self.large,
        }
    }

    /// Combined thrust of these thrusters when fitted as `kind` (N).
    pub fn thrust_newtons(&self, kind: PropulsionType) -> f64 {
        let spec = kind.spec();
        f64::from(self.small) * spec.small_newtons + f64::from(self.large) * spec.large_newtons
    }
}

/// Errors raised by grid construction and the performance model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PerformanceError {
    #[error("grid mass must be a finite, non-negative number (got {0})")]
    InvalidMass(f64),
    #[error("gravity must be a finite, non-negative number (got {0})")]
    InvalidGravity(f64),
    #[error("gravity is zero; lift capacity and thrust-to-weight ratio are undefined")]
    ZeroGravity,
}

/// Mass, gravity, and thruster loadout of a grid.
///
/// Mass and gravity are validated on construction and on deserialization, so every value of
/// this type holds finite, non-negative reals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRecord")]
pub struct GridSpecifications {
    mass: f64,
    gravity: f64,
    #[serde(rename = "atmospheric_thrusters")]
    atmospheric: ThrusterCount,
    #[serde(rename = "ion_thrusters")]
    ion: ThrusterCount,
    #[serde(rename = "hydrogen_thrusters")]
    hydrogen: ThrusterCount,
}

impl GridSpecifications {
    /// Create a grid without thrusters.
    pub fn new(mass: f64, gravity: f64) -> Result<Self, PerformanceError> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(PerformanceError::InvalidMass(mass));
        }
        if !gravity.is_finite() || gravity < 0.0 {
            return Err(PerformanceError::InvalidGravity(gravity));
        }
        Ok(Self {
            mass,
            gravity,
            atmospheric: ThrusterCount::default(),
            ion: ThrusterCount::default(),
            hydrogen: ThrusterCount::default(),
        })
    }

    /// Create a grid with all three thruster groups at once.
    pub fn with_thrusters(
        mass: f64,
        gravity: f64,
        atmospheric: ThrusterCount,
        ion: ThrusterCount,
        hydrogen: ThrusterCount,
    ) -> Result<Self, PerformanceError> {
        Ok(Self::new(mass, gravity)?
            .with(PropulsionType::Atmospheric, atmospheric)
            .with(PropulsionType::Ion, ion)
            .with(PropulsionType::Hydrogen, hydrogen))
    }

    /// Return a copy with the thruster group of `kind` replaced.
    pub fn with(mut self, kind: PropulsionType, count: ThrusterCount) -> Self {
        match kind {
            PropulsionType::Atmospheric => self.atmospheric = count,
            PropulsionType::Ion => self.ion = count,
            PropulsionType::Hydrogen => self.hydrogen = count,
        }
        self
    }

    /// Grid mass (kg).
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Local gravity (m/s²).
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn thrusters(&self, kind: PropulsionType) -> ThrusterCount {
        match kind {
            PropulsionType::Atmospheric => self.atmospheric,
            PropulsionType::Ion => self.ion,
            PropulsionType::Hydrogen => self.hydrogen,
        }
    }

    pub fn atmospheric(&self) -> ThrusterCount {
        self.atmospheric
    }

    pub fn ion(&self) -> ThrusterCount {
        self.ion
    }

    pub fn hydrogen(&self) -> ThrusterCount {
        self.hydrogen
    }
}

/// Unvalidated wire form of [`GridSpecifications`].
#[derive(Debug, Deserialize)]
struct GridRecord {
    mass: f64,
    #[serde(default = "default_gravity")]
    gravity: f64,
    #[serde(default)]
    atmospheric_thrusters: ThrusterCount,
    #[serde(default)]
    ion_thrusters: ThrusterCount,
    #[serde(default)]
    hydrogen_thrusters: ThrusterCount,
}

fn default_gravity() -> f64 {
    DEFAULT_GRAVITY
}

impl TryFrom<GridRecord> for GridSpecifications {
    type Error = PerformanceError;

    fn try_from(value: GridRecord) -> Result<Self, Self::Error> {
        Self::with_thrusters(
            value.mass,
            value.gravity,
            value.atmospheric_thrusters,
            value.ion_thrusters,
            value.hydrogen_thrusters,
        )
    }
}
