//! Head counts of a city: occupants by kind, agents by mood

use serde::Serialize;
use std::collections::BTreeMap;

use crate::city::City;
use crate::core::error::Result;
use crate::core::types::{Mood, Tick};
use crate::entity::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CityCensus {
    pub tick: Tick,
    pub occupants: usize,
    /// Occupant count per type name
    pub by_kind: BTreeMap<String, usize>,
    pub agents: usize,
    pub happy: usize,
    pub indifferent: usize,
    pub dissatisfied: usize,
}

impl CityCensus {
    pub fn take(city: &City) -> Self {
        let mut census = Self {
            tick: city.current_tick(),
            ..Self::default()
        };

        for occupant in city.occupants() {
            census.occupants += 1;
            *census.by_kind.entry(occupant.kind().name().to_string()).or_default() += 1;

            if let Some(mood) = occupant.mood() {
                census.agents += 1;
                match mood {
                    Mood::Happy => census.happy += 1,
                    Mood::Indifferent => census.indifferent += 1,
                    Mood::Dissatisfied => census.dissatisfied += 1,
                }
            }
        }
        census
    }

    /// Share of agents that are happy (0.0 when there are none)
    pub fn happiness(&self) -> f64 {
        if self.agents == 0 {
            0.0
        } else {
            self.happy as f64 / self.agents as f64
        }
    }

    pub fn summary(&self) -> String {
        let kinds = self
            .by_kind
            .iter()
            .map(|(kind, count)| format!("{}={}", kind, count))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "Tick {}: {} occupants [{}] | agents {}: {} happy, {} indifferent, {} dissatisfied",
            self.tick,
            self.occupants,
            kinds,
            self.agents,
            self.happy,
            self.indifferent,
            self.dissatisfied
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
