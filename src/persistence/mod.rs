//! Saving, loading, importing and exporting cities

pub mod registry;
pub mod snapshot;
pub mod store;
pub mod transfer;

pub use registry::OccupantRegistry;
pub use snapshot::{open_snapshot, save_snapshot, SNAPSHOT_VERSION};
pub use store::{CityStore, SnapshotStore, TextStore};
pub use transfer::{export_text, export_to_file, import_from_file, import_text, parse_import};
