//! Text import and export
//!
//! One line per occupied cell: `<TypeName> <row> <column>`, separated by any
//! whitespace. Blank lines are skipped. Import is all-or-nothing: the first
//! bad line aborts it and the city is left as it was.

use std::fmt::Write as _;
use std::path::Path;

use crate::city::City;
use crate::core::error::{CityError, Result};
use crate::core::types::Position;
use crate::entity::{Item, Occupant};
use crate::persistence::registry::OccupantRegistry;

/// Export lines for every occupant, in row-major order
pub fn export_text(city: &City) -> String {
    let mut text = String::new();
    for occupant in city.occupants() {
        let position = occupant.position();
        // Writing to a String cannot fail
        let _ = writeln!(text, "{} {} {}", occupant.kind(), position.row, position.column);
    }
    text
}

/// Write the export to `path`, returning the number of lines written
pub fn export_to_file(city: &City, path: &Path) -> Result<usize> {
    let text = export_text(city);
    std::fs::write(path, &text).map_err(|source| CityError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    let count = city.occupant_count();
    tracing::info!("Exported {} occupants to {}", count, path.display());
    Ok(count)
}

/// Parse every line into an occupant without touching any city
pub fn parse_import(text: &str, size: usize, registry: &OccupantRegistry) -> Result<Vec<Occupant>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line, size, registry))
        .collect()
}

fn parse_line(line_no: usize, line: &str, size: usize, registry: &OccupantRegistry) -> Result<Occupant> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [name, row, column] = tokens[..] else {
        return Err(CityError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        });
    };

    let row = parse_coordinate(line_no, row)?;
    let column = parse_coordinate(line_no, column)?;
    let in_bounds = |v: i64| v >= 0 && (v as u64) < size as u64;
    if !in_bounds(row) || !in_bounds(column) {
        return Err(CityError::OutOfBoundsCoordinate {
            line: line_no,
            row,
            column,
            size,
        });
    }

    registry.instantiate(name, Position::new(row as usize, column as usize))
}

fn parse_coordinate(line_no: usize, value: &str) -> Result<i64> {
    value.parse::<i64>().map_err(|_| CityError::NumberFormatError {
        line: line_no,
        value: value.to_string(),
    })
}

/// Import `text` into `city`, overwriting the named cells.
///
/// Returns the number of occupants placed.
pub fn import_text(city: &mut City, text: &str, registry: &OccupantRegistry) -> Result<usize> {
    let occupants = parse_import(text, city.size(), registry)?;
    let count = occupants.len();
    for occupant in occupants {
        city.place(occupant);
    }
    Ok(count)
}

/// Import a file into `city`. A file with nothing but whitespace is rejected.
pub fn import_from_file(city: &mut City, path: &Path, registry: &OccupantRegistry) -> Result<usize> {
    let text = std::fs::read_to_string(path).map_err(|source| CityError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        return Err(CityError::EmptyFile(path.to_path_buf()));
    }
    let count = import_text(city, &text, registry)?;
    tracing::info!("Imported {} occupants from {}", count, path.display());
    Ok(count)
}
