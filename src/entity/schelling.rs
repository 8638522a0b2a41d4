//! Schelling segregation rule
//!
//! A Schelling person is indifferent with no neighbours or only similar ones,
//! dissatisfied when fewer than a third of its neighbours are similar, and
//! happy otherwise. A dissatisfied person steps into the first free
//! neighbouring cell.

use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::core::types::{Mood, OccupantKind, Position};
use crate::entity::agent::AgentState;
use crate::entity::item::Item;
use crate::render::colors::{self, Color};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchellingPerson {
    position: Position,
    agent: AgentState,
}

impl SchellingPerson {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            agent: AgentState::new(Mood::Indifferent),
        }
    }
}

/// Mood for `similar` like-kind neighbours out of `total` occupied ones.
///
/// The one-third threshold is compared in real arithmetic, so 1 similar of 3
/// is not below `3 / 3.0` and counts as happy.
pub fn segregation_mood(total: usize, similar: usize) -> Mood {
    if total == 0 || similar == total {
        Mood::Indifferent
    } else if (similar as f64) < total as f64 / 3.0 {
        Mood::Dissatisfied
    } else {
        Mood::Happy
    }
}

impl Item for SchellingPerson {
    fn kind(&self) -> OccupantKind {
        OccupantKind::SchellingPerson
    }

    fn position(&self) -> Position {
        self.position
    }

    fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    fn decide(&mut self, city: &mut City) {
        self.agent.take_made_happy();
        let (total, similar) = city.neighbor_census(self.position, self.kind());
        self.agent.set_mood(segregation_mood(total, similar));
    }

    fn change(&mut self, city: &mut City) {
        self.agent.step();
        if !self.agent.is_dissatisfied() {
            return;
        }
        if let Some(target) = city.neighbors(self.position).find(|p| city.is_vacant(*p)) {
            tracing::debug!("Schelling person moves {} -> {}", self.position, target);
            self.position = target;
        }
    }

    fn color(&self) -> Color {
        colors::MAGENTA
    }

    fn agent(&self) -> Option<&AgentState> {
        Some(&self.agent)
    }

    fn agent_mut(&mut self) -> Option<&mut AgentState> {
        Some(&mut self.agent)
    }
}
