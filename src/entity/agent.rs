//! Emotional state carried by person-like occupants

use serde::{Deserialize, Serialize};

use crate::core::types::Mood;

/// Mood, step counter and the made-happy mark of an agent.
///
/// The step counter only moves forward, one step per `change`. The made-happy
/// mark is set by a cheerful neighbour and consumed by the agent's next
/// decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    mood: Mood,
    steps: u64,
    made_happy: bool,
}

impl Default for AgentState {
    fn default() -> Self {
        Self::new(Mood::Dissatisfied)
    }
}

impl AgentState {
    pub fn new(mood: Mood) -> Self {
        Self {
            mood,
            steps: 0,
            made_happy: false,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn is_happy(&self) -> bool {
        self.mood == Mood::Happy
    }

    pub fn is_indifferent(&self) -> bool {
        self.mood == Mood::Indifferent
    }

    pub fn is_dissatisfied(&self) -> bool {
        self.mood == Mood::Dissatisfied
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advance the step counter
    pub(crate) fn step(&mut self) {
        self.steps += 1;
    }

    /// Force the agent happy until its next decision
    pub fn make_happy(&mut self) {
        self.mood = Mood::Happy;
        self.made_happy = true;
    }

    pub fn was_made_happy(&self) -> bool {
        self.made_happy
    }

    /// Clear the made-happy mark, returning whether it was set
    pub(crate) fn take_made_happy(&mut self) -> bool {
        std::mem::take(&mut self.made_happy)
    }
}
