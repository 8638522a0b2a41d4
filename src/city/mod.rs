//! City layer - the grid of cells and its query surface

pub mod grid;

pub use grid::{moore_neighbors, City};
