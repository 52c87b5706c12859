//! Side-by-side comparison data for saved presets.

use std::io::Write;

use csv::Writer;
use lift_presets::Preset;
use lift_propulsion::{PropulsionType, lift_capacity, thrust_by_type, thrust_to_weight_ratio};
use serde::Serialize;

use crate::ExportError;

/// Reference values that map each metric onto `[0, 1]`.
pub const REFERENCE_THRUST_N: f64 = 1e7;
pub const REFERENCE_LIFT_KG: f64 = 1e6;
pub const REFERENCE_TWR: f64 = 10.0;

/// Thrust of one propulsion type on one preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThrustRow {
    pub grid: String,
    pub thruster_type: PropulsionType,
    pub thrust_n: f64,
}

/// Key metrics of one preset scaled against the reference values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMetrics {
    pub grid: String,
    pub total_thrust: f64,
    /// Zero when the grid cannot lift anything extra.
    pub lift_capacity: f64,
    /// Capped at 1.
    pub thrust_to_weight: f64,
}

/// Three rows per preset, one per propulsion type.
pub fn thrust_rows<'a, I>(presets: I) -> Vec<ThrustRow>
where
    I: IntoIterator<Item = &'a Preset>,
{
    presets
        .into_iter()
        .flat_map(|preset| {
            let thrust = thrust_by_type(&preset.specifications);
            PropulsionType::ALL.into_iter().map(move |kind| ThrustRow {
                grid: preset.name.clone(),
                thruster_type: kind,
                thrust_n: thrust.get(kind),
            })
        })
        .collect()
}

pub fn normalized_metrics<'a, I>(presets: I) -> Result<Vec<NormalizedMetrics>, ExportError>
where
    I: IntoIterator<Item = &'a Preset>,
{
    presets
        .into_iter()
        .map(|preset| {
            let spec = &preset.specifications;
            let lift = lift_capacity(spec)?;
            let twr = thrust_to_weight_ratio(spec)?;
            Ok(NormalizedMetrics {
                grid: preset.name.clone(),
                total_thrust: thrust_by_type(spec).total() / REFERENCE_THRUST_N,
                lift_capacity: if lift > 0.0 { lift / REFERENCE_LIFT_KG } else { 0.0 },
                thrust_to_weight: (twr / REFERENCE_TWR).min(1.0),
            })
        })
        .collect()
}

/// Write normalized metrics as a CSV table with a header row.
pub fn write_metrics_csv<W: Write>(
    writer: W,
    rows: &[NormalizedMetrics],
) -> Result<(), ExportError> {
    let mut wtr = Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write per-type thrust rows as a CSV table with a header row.
pub fn write_thrust_csv<W: Write>(writer: W, rows: &[ThrustRow]) -> Result<(), ExportError> {
    let mut wtr = Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
