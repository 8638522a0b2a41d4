//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation tick counter
pub type Tick = u64;

/// Cell coordinates inside the city grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Shift by a signed offset. `None` when the result would be negative;
    /// the upper bound is the grid's business.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            column: self.column.checked_add_signed(dc)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Moore neighbourhood offsets in scan order: dr = -1..=1, then dc = -1..=1.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Drawing shape of an occupant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Round,
    Square,
    Triangle,
}

/// Emotional state of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Indifferent,
    Dissatisfied,
}

impl Mood {
    /// Mood cycle used by plain persons: steps % 3 -> Happy, Indifferent, Dissatisfied
    pub fn from_steps(steps: u64) -> Self {
        match steps % 3 {
            0 => Mood::Happy,
            1 => Mood::Indifferent,
            _ => Mood::Dissatisfied,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Mood::Happy => 'u',
            Mood::Indifferent => '_',
            Mood::Dissatisfied => '~',
        }
    }
}

/// Closed set of occupant variants.
///
/// Similarity between occupants (Schelling, neighbour counts) compares these
/// tags, and the text import format names occupants by [`OccupantKind::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OccupantKind {
    Person,
    SchellingPerson,
    Walker,
    Cheerful,
    TrafficLight,
    StreetLight,
}

impl OccupantKind {
    pub const ALL: [OccupantKind; 6] = [
        OccupantKind::Person,
        OccupantKind::SchellingPerson,
        OccupantKind::Walker,
        OccupantKind::Cheerful,
        OccupantKind::TrafficLight,
        OccupantKind::StreetLight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OccupantKind::Person => "Person",
            OccupantKind::SchellingPerson => "SchellingPerson",
            OccupantKind::Walker => "Walker",
            OccupantKind::Cheerful => "Cheerful",
            OccupantKind::TrafficLight => "TrafficLight",
            OccupantKind::StreetLight => "StreetLight",
        }
    }

    /// Exact, case-sensitive lookup by type name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for OccupantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
