//! The closed set of occupant variants a city cell can hold

use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::core::types::{Mood, OccupantKind, Position, Shape};
use crate::entity::agent::AgentState;
use crate::entity::cheerful::Cheerful;
use crate::entity::item::Item;
use crate::entity::lights::{StreetLight, TrafficLight};
use crate::entity::person::Person;
use crate::entity::schelling::SchellingPerson;
use crate::entity::walker::Walker;
use crate::render::colors::Color;

/// Anything stored in a city cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Person(Person),
    SchellingPerson(SchellingPerson),
    Walker(Walker),
    Cheerful(Cheerful),
    TrafficLight(TrafficLight),
    StreetLight(StreetLight),
}

/// Forward a call to whichever variant is inside
macro_rules! each_variant {
    ($occupant:expr, $inner:ident => $call:expr) => {
        match $occupant {
            Occupant::Person($inner) => $call,
            Occupant::SchellingPerson($inner) => $call,
            Occupant::Walker($inner) => $call,
            Occupant::Cheerful($inner) => $call,
            Occupant::TrafficLight($inner) => $call,
            Occupant::StreetLight($inner) => $call,
        }
    };
}

impl Occupant {
    /// Fresh occupant of the given kind, in its initial state
    pub fn new(kind: OccupantKind, position: Position) -> Self {
        match kind {
            OccupantKind::Person => Person::new(position).into(),
            OccupantKind::SchellingPerson => SchellingPerson::new(position).into(),
            OccupantKind::Walker => Walker::new(position).into(),
            OccupantKind::Cheerful => Cheerful::new(position).into(),
            OccupantKind::TrafficLight => TrafficLight::new(position).into(),
            OccupantKind::StreetLight => StreetLight::new(position).into(),
        }
    }

    pub fn mood(&self) -> Option<Mood> {
        self.agent().map(AgentState::mood)
    }

    pub fn steps(&self) -> Option<u64> {
        self.agent().map(AgentState::steps)
    }
}

impl Item for Occupant {
    fn kind(&self) -> OccupantKind {
        each_variant!(self, o => o.kind())
    }

    fn position(&self) -> Position {
        each_variant!(self, o => o.position())
    }

    fn relocate(&mut self, position: Position) {
        each_variant!(self, o => o.relocate(position))
    }

    fn decide(&mut self, city: &mut City) {
        each_variant!(self, o => o.decide(city))
    }

    fn change(&mut self, city: &mut City) {
        each_variant!(self, o => o.change(city))
    }

    fn shape(&self) -> Shape {
        each_variant!(self, o => o.shape())
    }

    fn color(&self) -> Color {
        each_variant!(self, o => o.color())
    }

    fn is_active(&self) -> bool {
        each_variant!(self, o => o.is_active())
    }

    fn agent(&self) -> Option<&AgentState> {
        each_variant!(self, o => o.agent())
    }

    fn agent_mut(&mut self) -> Option<&mut AgentState> {
        each_variant!(self, o => o.agent_mut())
    }
}

impl From<Person> for Occupant {
    fn from(person: Person) -> Self {
        Occupant::Person(person)
    }
}

impl From<SchellingPerson> for Occupant {
    fn from(person: SchellingPerson) -> Self {
        Occupant::SchellingPerson(person)
    }
}

impl From<Walker> for Occupant {
    fn from(walker: Walker) -> Self {
        Occupant::Walker(walker)
    }
}

impl From<Cheerful> for Occupant {
    fn from(cheerful: Cheerful) -> Self {
        Occupant::Cheerful(cheerful)
    }
}

impl From<TrafficLight> for Occupant {
    fn from(light: TrafficLight) -> Self {
        Occupant::TrafficLight(light)
    }
}

impl From<StreetLight> for Occupant {
    fn from(light: StreetLight) -> Self {
        Occupant::StreetLight(light)
    }
}
