//! Tick system - one full pass over the city
//!
//! Cells are visited row by row, column by column. Each occupant found
//! decides and then changes before the scan moves on, so its effects (a
//! cheered-up neighbour, a vacated or newly taken cell) are visible to every
//! occupant processed after it. An occupant that moves to a cell the scan has
//! not reached yet is visited again in the same tick; that order dependence is
//! part of the model.

use crate::city::City;
use crate::core::types::{Mood, OccupantKind, Position, Tick};
use crate::entity::Item;

/// Events generated during a simulation tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationEvent {
    /// An occupant left one cell for another
    Moved {
        kind: OccupantKind,
        from: Position,
        to: Position,
        tick: Tick,
    },
    /// An agent ended its turn in a different mood than it started
    MoodChanged {
        kind: OccupantKind,
        position: Position,
        from: Mood,
        to: Mood,
        tick: Tick,
    },
}

/// Advance the city by one tick, returning what happened
pub fn run_simulation_tick(city: &mut City) -> Vec<SimulationEvent> {
    let tick = city.current_tick + 1;
    let mut events = Vec::new();

    let size = city.size();
    for row in 0..size {
        for column in 0..size {
            let position = Position::new(row, column);
            if let Some(event_pair) = take_turn(city, position, tick) {
                events.extend(event_pair.into_iter().flatten());
            }
        }
    }

    city.current_tick = tick;
    tracing::debug!("Tick {} complete: {} events", tick, events.len());
    events
}

/// Decide then change for the occupant at `position`, if any
fn take_turn(city: &mut City, position: Position, tick: Tick) -> Option<[Option<SimulationEvent>; 2]> {
    city.with_occupant(position, |occupant, city| {
        let mood_before = occupant.mood();

        occupant.decide(city);
        occupant.change(city);

        let kind = occupant.kind();
        let to = occupant.position();
        let moved = (to != position).then(|| {
            tracing::debug!("{} moved {} -> {}", kind, position, to);
            SimulationEvent::Moved {
                kind,
                from: position,
                to,
                tick,
            }
        });
        let mood_changed = match (mood_before, occupant.mood()) {
            (Some(from), Some(to_mood)) if from != to_mood => Some(SimulationEvent::MoodChanged {
                kind,
                position: to,
                from,
                to: to_mood,
                tick,
            }),
            _ => None,
        };
        [moved, mood_changed]
    })
}
