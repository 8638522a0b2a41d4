//! Cheerful person: always happy, and cheers up every agent next to it

use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::core::types::{Mood, OccupantKind, Position, Shape};
use crate::entity::agent::AgentState;
use crate::entity::item::Item;
use crate::render::colors::{self, Color};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cheerful {
    position: Position,
    agent: AgentState,
}

impl Cheerful {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            agent: AgentState::new(Mood::Happy),
        }
    }
}

impl Item for Cheerful {
    fn kind(&self) -> OccupantKind {
        OccupantKind::Cheerful
    }

    fn position(&self) -> Position {
        self.position
    }

    fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    /// Forces each neighbouring agent happy and marks it, so its own next
    /// decision keeps the mood. Its own mood never changes; a mark left by
    /// another cheerful is simply dropped.
    fn decide(&mut self, city: &mut City) {
        self.agent.take_made_happy();
        for position in city.neighbors(self.position) {
            if let Some(agent) = city.get_mut(position).and_then(|o| o.agent_mut()) {
                agent.make_happy();
            }
        }
    }

    fn change(&mut self, _city: &mut City) {
        self.agent.step();
    }

    fn shape(&self) -> Shape {
        Shape::Triangle
    }

    fn color(&self) -> Color {
        colors::PINK
    }

    fn agent(&self) -> Option<&AgentState> {
        Some(&self.agent)
    }

    fn agent_mut(&mut self) -> Option<&mut AgentState> {
        Some(&mut self.agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::lights::TrafficLight;
    use crate::entity::person::Person;

    #[test]
    fn test_cheers_adjacent_agents_only() {
        let mut city = City::new(25);
        city.place(Person::new(Position::new(9, 10)).into());
        city.place(Person::new(Position::new(10, 9)).into());
        city.place(Person::new(Position::new(13, 13)).into());
        city.place(TrafficLight::new(Position::new(11, 11)).into());

        let mut cheerful = Cheerful::new(Position::new(10, 10));
        cheerful.decide(&mut city);

        for pos in [Position::new(9, 10), Position::new(10, 9)] {
            let agent = city.get(pos).and_then(|o| o.agent()).unwrap();
            assert!(agent.is_happy());
            assert!(agent.was_made_happy());
        }
        let far = city.get(Position::new(13, 13)).and_then(|o| o.agent()).unwrap();
        assert!(far.is_dissatisfied());
        assert!(!far.was_made_happy());
        assert!(!city.get(Position::new(11, 11)).unwrap().is_agent());
    }

    #[test]
    fn test_stays_happy() {
        let mut city = City::new(5);
        let mut cheerful = Cheerful::new(Position::new(2, 2));
        for _ in 0..4 {
            cheerful.decide(&mut city);
            cheerful.change(&mut city);
        }
        assert!(cheerful.agent.is_happy());
        assert_eq!(cheerful.agent.steps(), 4);
        assert_eq!(cheerful.shape(), Shape::Triangle);
    }
}
