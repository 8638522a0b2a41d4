//! The city grid: a fixed square of cells, each empty or holding one occupant

use crate::core::config::{CityConfig, Placement};
use crate::core::error::{CityError, Result};
use crate::core::types::{OccupantKind, Position, Tick, MOORE_OFFSETS};
use crate::entity::{Item, Occupant};
use crate::simulation::tick::{run_simulation_tick, SimulationEvent};

/// In-bounds Moore neighbours of `position` on a `size` x `size` grid, in
/// scan order (north-west first, south-east last).
pub fn moore_neighbors(position: Position, size: usize) -> impl Iterator<Item = Position> {
    MOORE_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        position
            .offset(dr, dc)
            .filter(|p| p.row < size && p.column < size)
    })
}

/// The simulated city.
///
/// Cells are stored row-major. Every occupant sits in exactly one cell and
/// its own cached position names that cell; `set` and the tick machinery keep
/// the two in step.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    size: usize,
    cells: Vec<Option<Occupant>>,
    pub(crate) current_tick: Tick,
}

impl City {
    /// An empty `size` x `size` city
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            current_tick: 0,
        }
    }

    /// Build a city from configuration, placing the configured population
    pub fn from_config(config: &CityConfig) -> Result<Self> {
        config.validate()?;
        let mut city = Self::new(config.size);
        city.populate(&config.population);
        Ok(city)
    }

    /// Rebuild a city from stored cells, checking the placement invariant
    pub(crate) fn from_cells(size: usize, cells: Vec<Option<Occupant>>, current_tick: Tick) -> Result<Self> {
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(CityError::CorruptSnapshot(format!(
                "{} cells stored for a {}x{} city",
                cells.len(),
                size,
                size
            )));
        }
        let city = Self { size, cells, current_tick };
        for (index, cell) in city.cells.iter().enumerate() {
            if let Some(occupant) = cell {
                let slot = Position::new(index / size, index % size);
                if occupant.position() != slot {
                    return Err(CityError::CorruptSnapshot(format!(
                        "{} stored at {} believes it is at {}",
                        occupant.kind(),
                        slot,
                        occupant.position()
                    )));
                }
            }
        }
        Ok(city)
    }

    fn populate(&mut self, placements: &[Placement]) {
        for placement in placements {
            self.place(Occupant::new(placement.kind, placement.position()));
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// True iff `0 <= row < size` and `0 <= column < size`
    pub fn in_bounds(&self, row: isize, column: isize) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.size && (column as usize) < self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size && position.column < self.size
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.row * self.size + position.column)
        } else {
            None
        }
    }

    /// Occupant at `position`; `None` when empty or out of bounds
    #[inline]
    pub fn get(&self, position: Position) -> Option<&Occupant> {
        self.index(position).and_then(|i| self.cells[i].as_ref())
    }

    #[inline]
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Occupant> {
        self.index(position).and_then(|i| self.cells[i].as_mut())
    }

    /// Signed-coordinate lookup; out of bounds reads as empty
    pub fn get_at(&self, row: isize, column: isize) -> Option<&Occupant> {
        if !self.in_bounds(row, column) {
            return None;
        }
        self.get(Position::new(row as usize, column as usize))
    }

    /// Overwrite a cell, returning what was there.
    ///
    /// A stored occupant has its cached position rewritten to `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the grid; check with [`City::contains`]
    /// or [`City::in_bounds`] first.
    pub fn set(&mut self, position: Position, occupant: Option<Occupant>) -> Option<Occupant> {
        let index = self.index(position).unwrap_or_else(|| {
            panic!("cell {} is outside the {}x{} city", position, self.size, self.size)
        });
        let occupant = occupant.map(|mut o| {
            o.relocate(position);
            o
        });
        std::mem::replace(&mut self.cells[index], occupant)
    }

    /// Store an occupant under its own position, returning what was there.
    ///
    /// # Panics
    ///
    /// Panics if the occupant's position is outside the grid.
    pub fn place(&mut self, occupant: Occupant) -> Option<Occupant> {
        let position = occupant.position();
        self.set(position, Some(occupant))
    }

    /// Remove and return the occupant at `position`
    pub fn take(&mut self, position: Position) -> Option<Occupant> {
        self.index(position).and_then(|i| self.cells[i].take())
    }

    /// In bounds and unoccupied
    pub fn is_empty(&self, row: isize, column: isize) -> bool {
        self.in_bounds(row, column) && self.get_at(row, column).is_none()
    }

    /// In bounds and unoccupied
    pub fn is_vacant(&self, position: Position) -> bool {
        self.index(position).is_some_and(|i| self.cells[i].is_none())
    }

    /// In-bounds Moore neighbours of `position` in scan order
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> {
        moore_neighbors(position, self.size)
    }

    pub fn has_occupied_neighbor(&self, position: Position) -> bool {
        self.neighbors(position).any(|p| self.get(p).is_some())
    }

    /// (occupied neighbours, neighbours of `kind`) around `position`
    pub fn neighbor_census(&self, position: Position, kind: OccupantKind) -> (usize, usize) {
        self.neighbors(position)
            .filter_map(|p| self.get(p))
            .fold((0, 0), |(total, similar), o| {
                (total + 1, similar + usize::from(o.kind() == kind))
            })
    }

    /// Neighbours of the same kind as the occupant at (row, column); 0 when
    /// that cell is empty or out of bounds.
    pub fn count_equal_type_neighbors(&self, row: isize, column: isize) -> usize {
        match self.get_at(row, column) {
            Some(occupant) => {
                let position = Position::new(row as usize, column as usize);
                self.neighbor_census(position, occupant.kind()).1
            }
            None => 0,
        }
    }

    /// Occupants in row-major order
    pub fn occupants(&self) -> impl Iterator<Item = &Occupant> {
        self.cells.iter().flatten()
    }

    pub fn occupant_count(&self) -> usize {
        self.occupants().count()
    }

    /// Row-major cell contents
    pub(crate) fn cells(&self) -> &[Option<Occupant>] {
        &self.cells
    }

    /// Run `turn` on the occupant at `position` with the city at hand.
    ///
    /// The occupant is lifted out of its cell for the duration and filed
    /// under its (possibly new) position afterwards. Returns `None` when the
    /// cell is empty.
    pub(crate) fn with_occupant<R>(
        &mut self,
        position: Position,
        turn: impl FnOnce(&mut Occupant, &mut City) -> R,
    ) -> Option<R> {
        let mut occupant = self.take(position)?;
        let result = turn(&mut occupant, self);
        debug_assert!(
            self.is_vacant(occupant.position()),
            "{} moved onto an occupied cell {}",
            occupant.kind(),
            occupant.position()
        );
        self.place(occupant);
        Some(result)
    }

    /// Let the occupant at `position` decide. Returns false for an empty cell.
    pub fn decide_at(&mut self, position: Position) -> bool {
        self.with_occupant(position, |occupant, city| occupant.decide(city))
            .is_some()
    }

    /// Let the occupant at `position` apply its change. Returns where it ended
    /// up, or `None` for an empty cell.
    pub fn change_at(&mut self, position: Position) -> Option<Position> {
        self.with_occupant(position, |occupant, city| {
            occupant.change(city);
            occupant.position()
        })
    }

    /// Advance the whole city by one tick
    pub fn tick(&mut self) -> Vec<SimulationEvent> {
        run_simulation_tick(self)
    }
}

impl Default for City {
    /// The reference city: 25x25 with the default population
    fn default() -> Self {
        let config = CityConfig::default();
        let mut city = Self::new(config.size);
        city.populate(&config.population);
        city
    }
}
