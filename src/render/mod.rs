//! Render surface for the city
//!
//! Provides a read-only view of simulation state, taken once per tick.
//! This module never modifies the city.

pub mod ascii;
pub mod colors;

use crate::city::City;
use crate::core::types::{Mood, OccupantKind, Position, Shape, Tick};
use crate::entity::Item;

pub use ascii::AsciiSurface;
pub use colors::Color;

/// Lightweight snapshot of one occupied cell for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderItem {
    pub position: Position,
    pub kind: OccupantKind,
    pub shape: Shape,
    pub color: Color,
    pub is_active: bool,
    pub is_agent: bool,
    /// Present exactly when `is_agent`
    pub mood: Option<Mood>,
}

/// Collects every occupied cell, row-major, into a reusable buffer.
/// Call this once per tick, passing the same buffer to avoid allocations.
pub fn collect_render_items(city: &City, buffer: &mut Vec<RenderItem>) {
    buffer.clear();
    buffer.extend(city.occupants().map(|occupant| RenderItem {
        position: occupant.position(),
        kind: occupant.kind(),
        shape: occupant.shape(),
        color: occupant.color(),
        is_active: occupant.is_active(),
        is_agent: occupant.is_agent(),
        mood: occupant.mood(),
    }));
}

/// Anything that can show a city frame
pub trait RenderSurface {
    /// Present the items of one tick on a `size` x `size` grid
    fn present(&mut self, tick: Tick, size: usize, items: &[RenderItem]) -> std::io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_reference_city() {
        let city = City::default();
        let mut buffer = Vec::new();
        collect_render_items(&city, &mut buffer);

        assert_eq!(buffer.len(), 12);
        // Row-major: the traffic light at (0, 0) comes first
        assert_eq!(buffer[0].position, Position::new(0, 0));
        assert_eq!(buffer[0].color, colors::RED);
        assert!(!buffer[0].is_agent);
        assert_eq!(buffer[0].mood, None);

        let walker = buffer.iter().find(|i| i.kind == OccupantKind::Walker).unwrap();
        assert_eq!(walker.shape, Shape::Square);
        assert_eq!(walker.mood, Some(Mood::Indifferent));
        assert!(buffer.iter().all(|i| i.is_agent == i.mood.is_some()));
    }

    #[test]
    fn test_buffer_is_reused() {
        let mut buffer = Vec::new();
        collect_render_items(&City::default(), &mut buffer);
        collect_render_items(&City::new(3), &mut buffer);
        assert!(buffer.is_empty());
    }
}
