//! Periodic non-agent occupants: traffic lights and street lights

use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::core::types::{OccupantKind, Position};
use crate::entity::item::Item;
use crate::render::colors::{self, Color};

/// Red, yellow, green, yellow, then around again
pub const TRAFFIC_PHASES: [Color; 4] = [colors::RED, colors::YELLOW, colors::GREEN, colors::YELLOW];

/// Off, on
pub const STREET_PHASES: [Color; 2] = [colors::DARK_GRAY, colors::ORANGE];

/// Street lights switch once every this many turns
pub const STREET_LIGHT_PERIOD: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficLight {
    position: Position,
    phase: usize,
}

impl TrafficLight {
    pub fn new(position: Position) -> Self {
        Self { position, phase: 0 }
    }

    pub fn phase(&self) -> usize {
        self.phase
    }
}

impl Item for TrafficLight {
    fn kind(&self) -> OccupantKind {
        OccupantKind::TrafficLight
    }

    fn position(&self) -> Position {
        self.position
    }

    fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    fn decide(&mut self, _city: &mut City) {}

    fn change(&mut self, _city: &mut City) {
        self.phase = (self.phase + 1) % TRAFFIC_PHASES.len();
    }

    fn color(&self) -> Color {
        TRAFFIC_PHASES[self.phase]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetLight {
    position: Position,
    phase: usize,
    turns: u64,
}

impl StreetLight {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            phase: 0,
            turns: 0,
        }
    }

    pub fn is_on(&self) -> bool {
        self.phase == 1
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }
}

impl Item for StreetLight {
    fn kind(&self) -> OccupantKind {
        OccupantKind::StreetLight
    }

    fn position(&self) -> Position {
        self.position
    }

    fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    fn decide(&mut self, _city: &mut City) {}

    fn change(&mut self, _city: &mut City) {
        self.turns += 1;
        if self.turns % STREET_LIGHT_PERIOD == 0 {
            self.phase = (self.phase + 1) % STREET_PHASES.len();
        }
    }

    fn color(&self) -> Color {
        STREET_PHASES[self.phase]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Shape;

    #[test]
    fn test_traffic_light_cycle() {
        let mut city = City::new(5);
        let mut light = TrafficLight::new(Position::new(0, 0));
        assert_eq!(light.color(), colors::RED);

        let expected = [colors::YELLOW, colors::GREEN, colors::YELLOW, colors::RED];
        for color in expected {
            light.decide(&mut city);
            light.change(&mut city);
            assert_eq!(light.color(), color);
        }
        assert_eq!(light.phase(), 0);
    }

    #[test]
    fn test_traffic_light_is_not_agent() {
        let light = TrafficLight::new(Position::new(1, 1));
        assert!(!light.is_agent());
        assert!(light.is_active());
        assert_eq!(light.shape(), Shape::Round);
    }

    #[test]
    fn test_street_light_switches_every_third_turn() {
        let mut city = City::new(5);
        let mut light = StreetLight::new(Position::new(2, 2));
        assert_eq!(light.color(), colors::DARK_GRAY);

        let mut switched_on = Vec::new();
        for _ in 0..9 {
            light.change(&mut city);
            switched_on.push(light.is_on());
        }
        assert_eq!(
            switched_on,
            vec![false, false, true, true, true, false, false, false, true]
        );
        assert_eq!(light.turns(), 9);
        assert_eq!(light.color(), colors::ORANGE);
        assert!(!light.is_agent());
    }
}
