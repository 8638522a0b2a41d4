//! Walker: heads north one row per tick while nobody is around

use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::core::types::{Mood, OccupantKind, Position, Shape};
use crate::entity::agent::AgentState;
use crate::entity::item::Item;
use crate::render::colors::{self, Color};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walker {
    position: Position,
    agent: AgentState,
    /// Cell planned by the last decision; `None` when company stopped the walk
    target: Option<Position>,
}

impl Walker {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            agent: AgentState::new(Mood::Indifferent),
            target: None,
        }
    }

    pub fn target(&self) -> Option<Position> {
        self.target
    }

    /// One row north, or the current cell on the top edge
    fn northward(&self) -> Position {
        self.position.offset(-1, 0).unwrap_or(self.position)
    }

    fn can_enter(&self, city: &City, target: Position) -> bool {
        target != self.position && city.is_vacant(target)
    }
}

impl Item for Walker {
    fn kind(&self) -> OccupantKind {
        OccupantKind::Walker
    }

    fn position(&self) -> Position {
        self.position
    }

    fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    fn decide(&mut self, city: &mut City) {
        self.agent.take_made_happy();
        if city.has_occupied_neighbor(self.position) {
            self.target = None;
            self.agent.set_mood(Mood::Happy);
            return;
        }

        let target = self.northward();
        self.target = Some(target);
        let mood = if self.can_enter(city, target) {
            Mood::Happy
        } else {
            Mood::Dissatisfied
        };
        self.agent.set_mood(mood);
    }

    /// Steps, then moves if the planned cell is still free. The cell is
    /// checked again here regardless of the decided mood.
    fn change(&mut self, city: &mut City) {
        self.agent.step();
        if let Some(target) = self.target {
            if self.can_enter(city, target) {
                tracing::debug!("Walker moves {} -> {}", self.position, target);
                self.position = target;
            }
        }
    }

    fn shape(&self) -> Shape {
        Shape::Square
    }

    fn color(&self) -> Color {
        colors::GREEN
    }

    fn agent(&self) -> Option<&AgentState> {
        Some(&self.agent)
    }

    fn agent_mut(&mut self) -> Option<&mut AgentState> {
        Some(&mut self.agent)
    }
}
