//! Rule-based efficiency scoring and improvement suggestions.
//!
//! Everything here is a pure function of a [`GridSpecifications`]; the scores reward a
//! thrust-to-weight ratio around 5:1 and an even split between propulsion types.

use std::fmt;

use lift_propulsion::{
    GridSpecifications, PerformanceError, PropulsionType, hover_thrust, thrust_by_type,
    thrust_to_weight_ratio,
};
use serde::Serialize;

/// Share of a single propulsion type above which the grid counts as lopsided (%).
pub const HEAVY_SHARE_PERCENT: f64 = 60.0;

pub const MSG_ADD_THRUSTERS: &str = "Add thrusters to begin analysis";
pub const MSG_NO_RATIO: &str = "Add mass and thrusters to calculate thrust-to-weight ratio";
pub const MSG_LOW_RATIO: &str = "Add more thrusters to improve lift capacity";
pub const MSG_HIGH_RATIO: &str = "Consider reducing thrust for better efficiency";
pub const MSG_ATMOSPHERIC: &str = "Increase atmospheric thrusters for better planet performance";
pub const MSG_SPACE: &str = "Increase ion/hydrogen thrusters for space operations";

/// Percentage of total thrust supplied by each propulsion type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ThrustDistribution {
    pub atmospheric: f64,
    pub ion: f64,
    pub hydrogen: f64,
}

impl ThrustDistribution {
    pub fn new(atmospheric: f64, ion: f64, hydrogen: f64) -> Self {
        Self {
            atmospheric,
            ion,
            hydrogen,
        }
    }

    pub fn get(&self, kind: PropulsionType) -> f64 {
        match kind {
            PropulsionType::Atmospheric => self.atmospheric,
            PropulsionType::Ion => self.ion,
            PropulsionType::Hydrogen => self.hydrogen,
        }
    }
}

/// Categorical judgement of how thrust is spread across propulsion types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThrustBalance {
    NoThrusters,
    AtmosphericHeavy,
    IonHeavy,
    HydrogenHeavy,
    Balanced,
}

impl ThrustBalance {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoThrusters => "No thrusters configured",
            Self::AtmosphericHeavy => {
                "Heavy atmospheric focus - consider diversifying for space operations"
            }
            Self::IonHeavy => "Heavy ion focus - may struggle in atmosphere",
            Self::HydrogenHeavy => "Heavy hydrogen focus - check fuel efficiency",
            Self::Balanced => "Balanced thrust distribution",
        }
    }

    fn heavy(kind: PropulsionType) -> Self {
        match kind {
            PropulsionType::Atmospheric => Self::AtmosphericHeavy,
            PropulsionType::Ion => Self::IonHeavy,
            PropulsionType::Hydrogen => Self::HydrogenHeavy,
        }
    }
}

impl fmt::Display for ThrustBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Combined advisory output for one grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementReport {
    pub thrust_balance: ThrustBalance,
    pub efficiency_score: f64,
    pub suggested_changes: Vec<String>,
}

/// Share of total thrust per propulsion type, all zero for a grid without thrust.
pub fn thrust_distribution(spec: &GridSpecifications) -> ThrustDistribution {
    let thrust = thrust_by_type(spec);
    let total = thrust.total();
    if total == 0.0 {
        return ThrustDistribution::default();
    }
    ThrustDistribution {
        atmospheric: thrust.atmospheric / total * 100.0,
        ion: thrust.ion / total * 100.0,
        hydrogen: thrust.hydrogen / total * 100.0,
    }
}

/// Classify a distribution. The first type over [`HEAVY_SHARE_PERCENT`] wins, checked in
/// atmospheric → ion → hydrogen order.
pub fn thrust_balance_verdict(distribution: &ThrustDistribution) -> ThrustBalance {
    if PropulsionType::ALL
        .iter()
        .all(|kind| distribution.get(*kind) == 0.0)
    {
        return ThrustBalance::NoThrusters;
    }
    PropulsionType::ALL
        .into_iter()
        .find(|kind| distribution.get(*kind) > HEAVY_SHARE_PERCENT)
        .map(ThrustBalance::heavy)
        .unwrap_or(ThrustBalance::Balanced)
}

/// Efficiency score in `[0, 100]`.
///
/// Zero thrust or zero mass carries no signal and scores 0. Otherwise the score is
/// `clamp(twr * 20)` minus a penalty of `20 * Σ|t - total/3| / total`.
pub fn efficiency_score(spec: &GridSpecifications) -> Result<f64, PerformanceError> {
    let thrust = thrust_by_type(spec);
    let total = thrust.total();
    if total == 0.0 || spec.mass() == 0.0 {
        return Ok(0.0);
    }

    let twr = thrust_to_weight_ratio(spec)?;
    let base = (twr * 20.0).clamp(0.0, 100.0);

    let ideal = total / 3.0;
    let deviation: f64 = thrust.iter().map(|(_, t)| (t - ideal).abs()).sum();
    let penalty = deviation / total * 20.0;

    Ok((base - penalty).clamp(0.0, 100.0))
}

/// Ordered advisory messages. Rules after the zero-thrust guard apply independently.
pub fn suggested_changes(spec: &GridSpecifications) -> Result<Vec<String>, PerformanceError> {
    let thrust = thrust_by_type(spec);
    if thrust.total() == 0.0 {
        return Ok(vec![MSG_ADD_THRUSTERS.to_string()]);
    }

    let mut suggestions = Vec::new();
    let twr = thrust_to_weight_ratio(spec)?;
    if twr == 0.0 {
        suggestions.push(MSG_NO_RATIO.to_string());
    } else if twr < 1.5 {
        suggestions.push(MSG_LOW_RATIO.to_string());
    } else if twr > 4.0 {
        suggestions.push(MSG_HIGH_RATIO.to_string());
    }

    let hover = hover_thrust(spec);
    if thrust.atmospheric < hover {
        suggestions.push(MSG_ATMOSPHERIC.to_string());
    }
    if thrust.space_capable() < hover {
        suggestions.push(MSG_SPACE.to_string());
    }

    Ok(suggestions)
}

/// Balance verdict, score, and suggestions in one report.
pub fn suggest_improvements(
    spec: &GridSpecifications,
) -> Result<ImprovementReport, PerformanceError> {
    let distribution = thrust_distribution(spec);
    let report = ImprovementReport {
        thrust_balance: thrust_balance_verdict(&distribution),
        efficiency_score: efficiency_score(spec)?,
        suggested_changes: suggested_changes(spec)?,
    };
    tracing::debug!(
        balance = ?report.thrust_balance,
        score = report.efficiency_score,
        suggestions = report.suggested_changes.len(),
        "scored grid"
    );
    Ok(report)
}
