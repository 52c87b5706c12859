//! Data rows for the grid report document.
//!
//! Layout and rendering (PDF, HTML) live outside this crate; [`GridReport::to_markdown`] is a
//! plain-text rendering for terminals.

use std::fmt::Write as _;

use lift_core::format::format_number;
use lift_propulsion::{GridSpecifications, PerformanceError, PropulsionType, analyze};
use serde::Serialize;

pub const REPORT_TITLE: &str = "Space Engineers Grid Report";

/// One labeled table of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub title: String,
    /// Column headings; empty for key/value tables.
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridReport {
    pub title: String,
    pub tables: Vec<ReportTable>,
}

fn row<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Build the Basic Specifications, Thruster Configuration, and Performance Analysis tables.
pub fn grid_report(spec: &GridSpecifications) -> Result<GridReport, PerformanceError> {
    let perf = analyze(spec)?;

    let basic = ReportTable {
        title: "Basic Specifications".to_string(),
        header: Vec::new(),
        rows: vec![
            row(["Mass (kg)", format_number(spec.mass()).as_str()]),
            row(["Gravity (m/s²)", format_number(spec.gravity()).as_str()]),
        ],
    };

    let thrusters = ReportTable {
        title: "Thruster Configuration".to_string(),
        header: row(["Type", "Small", "Large"]),
        rows: PropulsionType::ALL
            .iter()
            .map(|kind| {
                let count = spec.thrusters(*kind);
                let (small, large) = (count.small.to_string(), count.large.to_string());
                row([kind.label(), small.as_str(), large.as_str()])
            })
            .collect(),
    };

    let mut performance_rows = vec![row([
        "Total Thrust (N)",
        format_number(perf.total_thrust_n).as_str(),
    ])];
    for (kind, thrust) in perf.thrust.iter() {
        performance_rows.push(vec![
            format!("{} Thrust (N)", kind.label()),
            format_number(thrust),
        ]);
    }
    performance_rows.push(row([
        "Required Hover Thrust (N)",
        format_number(perf.hover_thrust_n).as_str(),
    ]));
    performance_rows.push(row([
        "Lift Capacity (kg)",
        format_number(perf.lift_capacity_kg).as_str(),
    ]));
    performance_rows.push(row([
        "Thrust-to-Weight Ratio",
        format_number(perf.thrust_to_weight).as_str(),
    ]));

    let performance = ReportTable {
        title: "Performance Analysis".to_string(),
        header: row(["Metric", "Value"]),
        rows: performance_rows,
    };

    Ok(GridReport {
        title: REPORT_TITLE.to_string(),
        tables: vec![basic, thrusters, performance],
    })
}

impl GridReport {
    pub fn table(&self, title: &str) -> Option<&ReportTable> {
        self.tables.iter().find(|t| t.title == title)
    }

    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}", self.title);
        for table in &self.tables {
            let _ = writeln!(out, "\n## {}\n", table.title);
            if table.header.is_empty() {
                for cells in &table.rows {
                    let _ = writeln!(out, "- {}", cells.join(": "));
                }
                continue;
            }
            let _ = writeln!(out, "| {} |", table.header.join(" | "));
            let _ = writeln!(out, "|{}", "---|".repeat(table.header.len()));
            for cells in &table.rows {
                let _ = writeln!(out, "| {} |", cells.join(" | "));
            }
        }
        out
    }
}
