//! Grid output formats.

use std::io::{self, Write};

use super::enums::OutputFormat;
use crate::ascii::PixelGrid;

/// Write `grid` to `out` in the requested format.
pub fn write_grid<W: Write>(grid: &PixelGrid, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Summary => {
            let count = grid.width() * grid.height();
            let total: u64 = grid.pixels().map(|p| p.intensity as u64).sum();
            let mean = if count > 0 { total / count as u64 } else { 0 };
            writeln!(out, "grid: {}x{}", grid.width(), grid.height())?;
            writeln!(out, "mean intensity: {}", mean)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, grid)?;
            writeln!(out)?;
        }
        OutputFormat::Intensity => {
            for row in grid.rows() {
                let line = row
                    .iter()
                    .map(|p| p.intensity.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}
