//! Plain person: mood cycles with its step count

use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::core::types::{Mood, OccupantKind, Position};
use crate::entity::agent::AgentState;
use crate::entity::item::Item;
use crate::render::colors::{self, Color};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    position: Position,
    agent: AgentState,
}

impl Person {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            agent: AgentState::default(),
        }
    }
}

impl Item for Person {
    fn kind(&self) -> OccupantKind {
        OccupantKind::Person
    }

    fn position(&self) -> Position {
        self.position
    }

    fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    /// Happy, indifferent, dissatisfied by `steps % 3`, unless a cheerful
    /// neighbour already made this person happy for the tick.
    fn decide(&mut self, _city: &mut City) {
        if !self.agent.take_made_happy() {
            self.agent.set_mood(Mood::from_steps(self.agent.steps()));
        }
    }

    fn change(&mut self, _city: &mut City) {
        self.agent.step();
    }

    fn color(&self) -> Color {
        colors::BLUE
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
    use crate::core::types::Shape;

    fn person_after_steps(steps: u64) -> Person {
        let mut city = City::new(5);
        let mut person = Person::new(Position::new(2, 2));
        for _ in 0..steps {
            person.change(&mut city);
        }
        person.decide(&mut city);
        person
    }

    #[test]
    fn test_initial_state() {
        let person = Person::new(Position::new(1, 1));
        assert!(person.agent.is_dissatisfied());
        assert_eq!(person.color(), colors::BLUE);
        assert_eq!(person.shape(), Shape::Round);
        assert!(person.is_agent());
        assert!(person.is_active());
    }

    #[test]
    fn test_mood_follows_steps() {
        assert_eq!(person_after_steps(0).agent.mood(), Mood::Happy);
        assert_eq!(person_after_steps(1).agent.mood(), Mood::Indifferent);
        assert_eq!(person_after_steps(2).agent.mood(), Mood::Dissatisfied);
        assert_eq!(person_after_steps(3).agent.mood(), Mood::Happy);
    }

    #[test]
    fn test_made_happy_overrides_one_decision() {
        let mut city = City::new(5);
        let mut person = Person::new(Position::new(2, 2));
        person.change(&mut city); // steps = 1 -> would be Indifferent

        person.agent.make_happy();
        person.decide(&mut city);
        assert!(person.agent.is_happy());
        assert!(!person.agent.was_made_happy());

        person.decide(&mut city);
        assert!(person.agent.is_indifferent());
    }

    #[test]
    fn test_change_only_steps() {
        let mut city = City::new(5);
        let mut person = Person::new(Position::new(2, 2));
        person.change(&mut city);
        person.change(&mut city);
        assert_eq!(person.agent.steps(), 2);
        assert_eq!(person.position(), Position::new(2, 2));
    }
}
