//! Export helpers for CSV, JSON, and tabular report artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use lift_propulsion::PerformanceError;
use thiserror::Error;

pub mod comparison;
pub mod csv_report;
pub mod report;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("filesystem error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot analyze grid: {0}")]
    Performance(#[from] PerformanceError),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod json {
    use std::io::Write;

    use lift_presets::Preset;
    use serde_json::to_writer_pretty;

    use crate::ExportError;

    /// Write one preset record as pretty-printed JSON.
    pub fn write_preset<W: Write>(mut writer: W, preset: &Preset) -> Result<(), ExportError> {
        to_writer_pretty(&mut writer, preset)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Write a JSON array of preset records.
    pub fn write_presets<'a, W, I>(mut writer: W, presets: I) -> Result<(), ExportError>
    where
        W: Write,
        I: IntoIterator<Item = &'a Preset>,
    {
        let presets: Vec<&Preset> = presets.into_iter().collect();
        to_writer_pretty(&mut writer, &presets)?;
        writeln!(writer)?;
        Ok(())
    }
}
