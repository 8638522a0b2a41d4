//! City occupants: people, walkers, cheerful neighbours and lights

pub mod agent;
pub mod cheerful;
pub mod item;
pub mod lights;
pub mod occupant;
pub mod person;
pub mod schelling;
pub mod walker;

pub use agent::AgentState;
pub use cheerful::Cheerful;
pub use item::Item;
pub use lights::{StreetLight, TrafficLight};
pub use occupant::Occupant;
pub use person::Person;
pub use schelling::SchellingPerson;
pub use walker::Walker;
