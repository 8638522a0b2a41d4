//! City configuration
//!
//! Grid size, the snapshot file suffix and the initial population. The
//! defaults reproduce the reference city: a 25x25 grid seeded with twelve
//! occupants at fixed cells.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{CityError, Result};
use crate::core::types::{OccupantKind, Position};

/// Default side length of the city grid
pub const DEFAULT_SIZE: usize = 25;

/// Largest side length a configuration may ask for
pub const MAX_SIZE: usize = 4096;

/// Default file suffix required by binary snapshots
pub const DEFAULT_SNAPSHOT_EXTENSION: &str = "dat";

/// One occupant to place when the city is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: OccupantKind,
    pub row: usize,
    pub column: usize,
}

impl Placement {
    pub fn new(kind: OccupantKind, row: usize, column: usize) -> Self {
        Self { kind, row, column }
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }
}

/// Configuration for building a city
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityConfig {
    /// Side length of the square grid
    pub size: usize,

    /// Suffix (without the dot) that snapshot files must carry
    pub snapshot_extension: String,

    /// Occupants placed at construction, in order. Later entries overwrite
    /// earlier ones on the same cell.
    pub population: Vec<Placement>,
}

impl Default for CityConfig {
    fn default() -> Self {
        use OccupantKind::*;

        Self {
            size: DEFAULT_SIZE,
            snapshot_extension: DEFAULT_SNAPSHOT_EXTENSION.to_string(),
            population: vec![
                Placement::new(Person, 10, 10),
                Placement::new(Person, 15, 15),
                Placement::new(Walker, 20, 20),
                Placement::new(Walker, 5, 5),
                Placement::new(TrafficLight, 0, 0),
                Placement::new(TrafficLight, 0, 24),
                Placement::new(Cheerful, 6, 6),
                Placement::new(Cheerful, 15, 14),
                Placement::new(StreetLight, 2, 2),
                Placement::new(StreetLight, 17, 17),
                Placement::new(SchellingPerson, 3, 3),
                Placement::new(SchellingPerson, 22, 22),
            ],
        }
    }
}

impl CityConfig {
    /// An empty city of the given size
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            population: Vec::new(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CityError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Missing keys fall back to the defaults; a missing `population` table
    /// keeps the reference population.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let raw: TomlCity =
            toml::from_str(content).map_err(|e| CityError::InvalidConfig(e.to_string()))?;

        let defaults = Self::default();
        let size = raw.size.unwrap_or(defaults.size);
        check_size(size)?;

        let population = match raw.population {
            Some(entries) => entries
                .into_iter()
                .map(|entry| entry.into_placement(size))
                .collect::<Result<Vec<_>>>()?,
            None => defaults.population,
        };

        let config = Self {
            size,
            snapshot_extension: raw
                .snapshot_extension
                .map(|ext| ext.trim_start_matches('.').to_string())
                .unwrap_or(defaults.snapshot_extension),
            population,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every placement fits inside the grid
    pub fn validate(&self) -> Result<()> {
        check_size(self.size)?;
        if self.snapshot_extension.is_empty() {
            return Err(CityError::InvalidConfig("snapshot_extension must not be empty".into()));
        }
        if let Some(bad) = self
            .population
            .iter()
            .find(|p| p.row >= self.size || p.column >= self.size)
        {
            return Err(CityError::InvalidConfig(format!(
                "{} at ({}, {}) is outside the {}x{} city",
                bad.kind, bad.row, bad.column, self.size, self.size
            )));
        }
        Ok(())
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(CityError::InvalidConfig("size must be at least 1".into()));
    }
    if size > MAX_SIZE {
        return Err(CityError::InvalidConfig(format!(
            "size {} exceeds the maximum of {}",
            size, MAX_SIZE
        )));
    }
    Ok(())
}

/// TOML representation of a city file
#[derive(Debug, Deserialize)]
struct TomlCity {
    size: Option<usize>,
    snapshot_extension: Option<String>,
    population: Option<Vec<TomlPlacement>>,
}

/// TOML representation of a single placement
#[derive(Debug, Deserialize)]
struct TomlPlacement {
    kind: String,
    row: usize,
    column: usize,
}

impl TomlPlacement {
    fn into_placement(self, size: usize) -> Result<Placement> {
        let kind = OccupantKind::from_name(&self.kind).ok_or_else(|| {
            tracing::warn!("Rejected population entry with unknown kind {:?}", self.kind);
            CityError::InvalidConfig(format!("unknown occupant kind {:?}", self.kind))
        })?;
        if self.row >= size || self.column >= size {
            return Err(CityError::InvalidConfig(format!(
                "{} at ({}, {}) is outside the {}x{} city",
                kind, self.row, self.column, size, size
            )));
        }
        Ok(Placement::new(kind, self.row, self.column))
    }
}
