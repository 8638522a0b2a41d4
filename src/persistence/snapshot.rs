//! Binary whole-city snapshots
//!
//! A snapshot is the postcard encoding of the grid size, the tick counter and
//! every cell. Files must carry the configured suffix, and a snapshot that
//! does not decode to a consistent city is rejected as a whole.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::city::City;
use crate::core::error::{CityError, Result};
use crate::core::types::Tick;
use crate::entity::Occupant;

/// Bumped whenever the stored layout changes
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CitySnapshot {
    version: u32,
    size: usize,
    current_tick: Tick,
    cells: Vec<Option<Occupant>>,
}

/// Reject paths that do not end in `.{extension}`
pub fn check_extension(path: &Path, extension: &str) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == extension => Ok(()),
        _ => Err(CityError::InvalidFileType {
            path: path.to_path_buf(),
            expected: extension.to_string(),
        }),
    }
}

pub fn encode_snapshot(city: &City) -> std::result::Result<Vec<u8>, postcard::Error> {
    let snapshot = CitySnapshot {
        version: SNAPSHOT_VERSION,
        size: city.size(),
        current_tick: city.current_tick(),
        cells: city.cells().to_vec(),
    };
    postcard::to_allocvec(&snapshot)
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<City> {
    let snapshot: CitySnapshot =
        postcard::from_bytes(bytes).map_err(|e| CityError::CorruptSnapshot(e.to_string()))?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(CityError::CorruptSnapshot(format!(
            "unsupported snapshot version {} (expected {})",
            snapshot.version, SNAPSHOT_VERSION
        )));
    }
    City::from_cells(snapshot.size, snapshot.cells, snapshot.current_tick)
}

/// Save the whole city to `path`
pub fn save_snapshot(city: &City, path: &Path, extension: &str) -> Result<()> {
    check_extension(path, extension)?;
    let bytes = encode_snapshot(city).map_err(|e| CityError::WriteFailure {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()),
    })?;
    std::fs::write(path, bytes).map_err(|source| CityError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        "Saved city at tick {} ({} occupants) to {}",
        city.current_tick(),
        city.occupant_count(),
        path.display()
    );
    Ok(())
}

/// Load a whole city from `path`
pub fn open_snapshot(path: &Path, extension: &str) -> Result<City> {
    check_extension(path, extension)?;
    let bytes = std::fs::read(path).map_err(|source| CityError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;
    let city = decode_snapshot(&bytes)?;
    tracing::info!(
        "Opened city at tick {} ({} occupants) from {}",
        city.current_tick(),
        city.occupant_count(),
        path.display()
    );
    Ok(city)
}
