//! Closed-form lift and thrust metrics derived from a [`GridSpecifications`].

use serde::Serialize;

use crate::{GridSpecifications, PerformanceError, PropulsionType};

/// Thrust contributed by each propulsion type (N).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ThrustBreakdown {
    pub atmospheric: f64,
    pub ion: f64,
    pub hydrogen: f64,
}

impl ThrustBreakdown {
    pub fn get(&self, kind: PropulsionType) -> f64 {
        match kind {
            PropulsionType::Atmospheric => self.atmospheric,
            PropulsionType::Ion => self.ion,
            PropulsionType::Hydrogen => self.hydrogen,
        }
    }

    /// Per-type values in atmospheric → ion → hydrogen order.
    pub fn iter(&self) -> impl Iterator<Item = (PropulsionType, f64)> + '_ {
        PropulsionType::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    pub fn total(&self) -> f64 {
        self.atmospheric + self.ion + self.hydrogen
    }

    /// Thrust usable outside an atmosphere.
    pub fn space_capable(&self) -> f64 {
        self.ion + self.hydrogen
    }
}

/// Every derived metric for one grid, as shown in results and exports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub thrust: ThrustBreakdown,
    pub total_thrust_n: f64,
    pub hover_thrust_n: f64,
    pub lift_capacity_kg: f64,
    pub thrust_to_weight: f64,
}

/// Thrust produced by each propulsion type.
pub fn thrust_by_type(spec: &GridSpecifications) -> ThrustBreakdown {
    ThrustBreakdown {
        atmospheric: spec.atmospheric().thrust_newtons(PropulsionType::Atmospheric),
        ion: spec.ion().thrust_newtons(PropulsionType::Ion),
        hydrogen: spec.hydrogen().thrust_newtons(PropulsionType::Hydrogen),
    }
}

/// Sum of all thrust on the grid (N).
pub fn total_thrust(spec: &GridSpecifications) -> f64 {
    thrust_by_type(spec).total()
}

/// Thrust needed to hold the grid in place against gravity (N).
pub fn hover_thrust(spec: &GridSpecifications) -> f64 {
    spec.mass() * spec.gravity()
}

/// Extra mass the grid can lift beyond its own weight (kg).
///
/// Negative values mean the grid cannot hover. Zero gravity has no meaningful answer and is
/// reported as [`PerformanceError::ZeroGravity`].
pub fn lift_capacity(spec: &GridSpecifications) -> Result<f64, PerformanceError> {
    if spec.gravity() == 0.0 {
        return Err(PerformanceError::ZeroGravity);
    }
    Ok((total_thrust(spec) - hover_thrust(spec)) / spec.gravity())
}

/// Total thrust divided by weight. Zero for a massless grid.
pub fn thrust_to_weight_ratio(spec: &GridSpecifications) -> Result<f64, PerformanceError> {
    if spec.gravity() == 0.0 {
        return Err(PerformanceError::ZeroGravity);
    }
    if spec.mass() == 0.0 {
        return Ok(0.0);
    }
    Ok(total_thrust(spec) / hover_thrust(spec))
}

/// Compute the full set of metrics in one pass.
pub fn analyze(spec: &GridSpecifications) -> Result<PerformanceReport, PerformanceError> {
    let thrust = thrust_by_type(spec);
    let report = PerformanceReport {
        thrust,
        total_thrust_n: thrust.total(),
        hover_thrust_n: hover_thrust(spec),
        lift_capacity_kg: lift_capacity(spec)?,
        thrust_to_weight: thrust_to_weight_ratio(spec)?,
    };
    tracing::debug!(
        total_thrust_n = report.total_thrust_n,
        lift_capacity_kg = report.lift_capacity_kg,
        thrust_to_weight = report.thrust_to_weight,
        "analyzed grid"
    );
    Ok(report)
}
