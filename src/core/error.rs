use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CityError {
    #[error("Invalid file type for {path:?}: expected a .{expected} file")]
    InvalidFileType { path: PathBuf, expected: String },

    #[error("Could not read {path:?}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {path:?}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is empty: {0:?}")]
    EmptyFile(PathBuf),

    #[error("Corrupt city snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("Unknown occupant type: {0}")]
    UnknownOccupantType(String),

    #[error("No constructor registered for occupant type: {0}")]
    ConstructorUnavailable(String),

    #[error("Could not instantiate {kind}: {reason}")]
    InstantiationFailure { kind: String, reason: String },

    #[error("Malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Line {line}: coordinates ({row}, {column}) are outside the {size}x{size} city")]
    OutOfBoundsCoordinate {
        line: usize,
        row: i64,
        column: i64,
        size: usize,
    },

    #[error("Line {line}: {value:?} is not a valid coordinate")]
    NumberFormatError { line: usize, value: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Operation not implemented: {0}")]
    NotImplemented(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CityError>;
