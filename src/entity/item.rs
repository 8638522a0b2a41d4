//! The contract every grid occupant satisfies

use crate::city::City;
use crate::core::types::{OccupantKind, Position, Shape};
use crate::entity::agent::AgentState;
use crate::render::colors::{self, Color};

/// Behaviour shared by everything that can sit in a city cell.
///
/// During a tick the city calls `decide` then `change` on each occupant in
/// row-major order. While an occupant runs, it is held outside the grid and
/// receives the city by mutable reference, so it may inspect or influence
/// neighbours through position lookups. Moving is done by updating its own
/// position; the city files it under that cell once the call returns.
pub trait Item {
    /// Variant tag used for similarity checks and the text format
    fn kind(&self) -> OccupantKind;

    fn position(&self) -> Position;

    /// Overwrite the cached position. Only the city calls this, when it stores
    /// the occupant under a different cell.
    fn relocate(&mut self, position: Position);

    /// Work out the next state from the neighbourhood
    fn decide(&mut self, city: &mut City);

    /// Apply the decision
    fn change(&mut self, _city: &mut City) {}

    fn shape(&self) -> Shape {
        Shape::Round
    }

    fn color(&self) -> Color {
        colors::BLACK
    }

    fn is_active(&self) -> bool {
        true
    }

    /// Emotional state, for occupants that are agents
    fn agent(&self) -> Option<&AgentState> {
        None
    }

    fn agent_mut(&mut self) -> Option<&mut AgentState> {
        None
    }

    fn is_agent(&self) -> bool {
        self.agent().is_some()
    }
}
