//! Schelling City - grid city simulation with mood-driven agents
//!
//! A square city of cells, each holding at most one occupant. Every tick
//! visits the cells in row-major order and lets each occupant decide and then
//! act. Cities can be saved as binary snapshots and exchanged as plain text.

pub mod city;
pub mod core;
pub mod entity;
pub mod persistence;
pub mod render;
pub mod simulation;
