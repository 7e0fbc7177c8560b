//! Input and output glue: the graticule CSV reader and the world-file
//! writer. No algorithmic content lives here; parse errors abort the whole
//! run with the offending line number.

use crate::graticule::{Direction, Graticule, Orientation};
use crate::worldfile::WorldFile;

use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Exact header line the input file must start with.
pub const CSV_HEADER: &str = "lonlat,dir,value,x1,y1,x2,y2";

/// Reads and parses a graticule CSV file.
pub fn read_graticule_csv(path: &Path) -> Result<Vec<Graticule>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Could not open input file {}: {e}", path.display()))?;
    parse_graticule_csv(&data).map_err(|e| format!("{}: {e}", path.display()))
}

/// Parses graticule CSV text. The first line must match [`CSV_HEADER`]
/// exactly; every following non-blank line is one record. The first
/// malformed row fails the whole parse.
pub fn parse_graticule_csv(data: &str) -> Result<Vec<Graticule>, String> {
    let mut lines = data.lines();
    let header = lines
        .next()
        .ok_or_else(|| "empty input, expected header line".to_string())?;
    if header.trim_end() != CSV_HEADER {
        return Err(format!(
            "unexpected header {header:?}, expected {CSV_HEADER:?}"
        ));
    }

    let mut records = Vec::new();
    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_row(line).map_err(|e| format!("line {}: {e}", idx + 2))?;
        records.push(record);
    }
    Ok(records)
}

fn parse_row(line: &str) -> Result<Graticule, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 7 {
        return Err(format!(
            "expected 7 comma-separated fields, found {}",
            fields.len()
        ));
    }

    let orientation = match fields[0].trim() {
        "lat" => Orientation::Lat,
        "lon" => Orientation::Lon,
        other => return Err(format!("expected 'lat' or 'lon', found {other:?}")),
    };
    let direction = Direction::from_code(fields[1].trim())
        .ok_or_else(|| format!("expected one of n,s,e,w,h,v, found {:?}", fields[1].trim()))?;
    let magnitude: u32 = fields[2]
        .trim()
        .parse()
        .map_err(|e| format!("bad value field {:?}: {e}", fields[2].trim()))?;

    let mut coords = [0.0f64; 4];
    for (slot, field) in coords.iter_mut().zip(&fields[3..7]) {
        *slot = field
            .trim()
            .parse()
            .map_err(|e| format!("bad coordinate {:?}: {e}", field.trim()))?;
    }
    let p0 = [coords[0], coords[1]];
    let p1 = [coords[2], coords[3]];
    if p0 == p1 {
        return Err("zero-length segment, endpoints coincide".to_string());
    }

    Ok(Graticule::new(orientation, direction, magnitude, p0, p1))
}

/// Writes the six coefficients in world-file order, one per line.
pub fn write_world_file(path: &Path, world: &WorldFile) -> Result<(), String> {
    let mut text = String::new();
    for value in world.lines() {
        // Never a formatting error on a String.
        let _ = writeln!(text, "{value}");
    }
    fs::write(path, text)
        .map_err(|e| format!("Could not open output file for writing {}: {e}", path.display()))
}

/// Serializes a report to pretty JSON at the given path.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
