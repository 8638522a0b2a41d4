pub mod config;
pub mod error;
pub mod types;

pub use config::{CityConfig, Placement};
pub use error::{CityError, Result};
pub use types::{Mood, OccupantKind, Position, Shape, Tick};
