//! Output formatting module

use std::io::Write;
use vreg_domain::{VehicleRegistry, VehicleVariant};
use vreg_types::{OutputFormat, Result};

/// Write every registered vehicle
pub fn write_listing<W: Write>(out: &mut W, registry: &VehicleRegistry, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let vehicles: Vec<_> = registry.iter().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&vehicles)?)?;
    } else {
        for entry in registry.list_all() {
            write!(out, "{}", entry)?;
        }
    }
    Ok(())
}

/// Write the result of an ID lookup
pub fn write_lookup<W: Write>(
    out: &mut W,
    id: i32,
    found: Option<&VehicleVariant>,
    format: OutputFormat,
) -> Result<()> {
    match (format, found) {
        (OutputFormat::Json, found) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&found)?)?;
        }
        (OutputFormat::Table, Some(vehicle)) => {
            write!(out, "{}", vehicle.render())?;
        }
        (OutputFormat::Table, None) => {
            writeln!(out, "Vehicle with ID {} not found!", id)?;
        }
    }
    Ok(())
}
