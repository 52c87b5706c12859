//! CSV export of a single grid and its performance analysis.

use std::io::Write;

use csv::{Writer, WriterBuilder};
use lift_core::format::format_number;
use lift_propulsion::{GridSpecifications, PropulsionType, analyze};

use crate::ExportError;

pub const CSV_TITLE: &str = "Space Engineers Grid Specifications";

/// Write the grid CSV: title, basic specifications, thruster configuration, and performance
/// analysis blocks separated by empty lines.
pub fn write_grid_csv<W: Write>(writer: W, spec: &GridSpecifications) -> Result<(), ExportError> {
    let perf = analyze(spec)?;
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(writer);

    wtr.write_record([CSV_TITLE])?;
    blank_line(&mut wtr)?;

    wtr.write_record(["Basic Specifications"])?;
    wtr.write_record(["Mass (kg)", format_number(spec.mass()).as_str()])?;
    wtr.write_record(["Gravity (m/s²)", format_number(spec.gravity()).as_str()])?;
    blank_line(&mut wtr)?;

    wtr.write_record(["Thruster Configuration"])?;
    wtr.write_record(["Type", "Small", "Large"])?;
    for kind in PropulsionType::ALL {
        let count = spec.thrusters(kind);
        wtr.write_record([
            kind.label(),
            count.small.to_string().as_str(),
            count.large.to_string().as_str(),
        ])?;
    }
    blank_line(&mut wtr)?;

    wtr.write_record(["Performance Analysis"])?;
    let mut metric =
        |label: &str, value: f64| wtr.write_record([label, format_number(value).as_str()]);
    metric("Total Thrust (N)", perf.total_thrust_n)?;
    for (kind, thrust) in perf.thrust.iter() {
        metric(&format!("{} Thrust (N)", kind.label()), thrust)?;
    }
    metric("Required Hover Thrust (N)", perf.hover_thrust_n)?;
    metric("Lift Capacity (kg)", perf.lift_capacity_kg)?;
    metric("Thrust-to-Weight Ratio", perf.thrust_to_weight)?;

    wtr.flush()?;
    Ok(())
}

/// End the current section with an empty line. The csv writer renders a zero-field record as
/// `""`, so the newline goes straight to the underlying writer.
fn blank_line<W: Write>(wtr: &mut Writer<W>) -> Result<(), ExportError> {
    wtr.flush()?;
    wtr.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Render the grid CSV into a string.
pub fn grid_csv_string(spec: &GridSpecifications) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_grid_csv(&mut buf, spec)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
