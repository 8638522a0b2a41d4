//! Integration tests for the city grid
//!
//! Covers the reference city, grid queries and the properties every tick must
//! preserve: one occupant per cell, cached positions matching cells, and a
//! constant population.

use proptest::prelude::*;

use schelling_city::city::City;
use schelling_city::core::config::CityConfig;
use schelling_city::core::types::{Mood, OccupantKind, Position};
use schelling_city::entity::{Item, Occupant, Person, Walker};
use schelling_city::simulation::census::CityCensus;

fn assert_consistent(city: &City) {
    for occupant in city.occupants() {
        let at = city
            .get(occupant.position())
            .expect("occupant must be stored under its own position");
        assert_eq!(at.position(), occupant.position());
    }
}

// ============================================================================
// Reference city
// ============================================================================

#[test]
fn test_reference_city_layout() {
    let city = City::default();
    assert_eq!(city.size(), 25);
    assert_eq!(city.occupant_count(), 12);
    assert_eq!(city.current_tick(), 0);

    let census = CityCensus::take(&city);
    for kind in OccupantKind::ALL {
        assert_eq!(census.by_kind[kind.name()], 2, "two of each kind: {}", kind);
    }
    assert_consistent(&city);
}

#[test]
fn test_from_default_config_matches_default_city() {
    let city = City::from_config(&CityConfig::default()).unwrap();
    assert_eq!(city, City::default());
}

#[test]
fn test_walker_climbs_to_top_edge() {
    let mut city = City::default();
    city.tick();
    assert_eq!(
        city.get(Position::new(19, 20)).map(|o| o.kind()),
        Some(OccupantKind::Walker)
    );
    assert!(city.is_vacant(Position::new(20, 20)));

    for _ in 1..20 {
        city.tick();
    }
    let walker = city.get(Position::new(0, 20)).unwrap();
    assert_eq!(walker.mood(), Some(Mood::Happy));

    for _ in 0..5 {
        city.tick();
    }
    let walker = city.get(Position::new(0, 20)).unwrap();
    assert_eq!(walker.kind(), OccupantKind::Walker);
    assert_eq!(walker.mood(), Some(Mood::Dissatisfied));
    assert_eq!(walker.steps(), Some(25));
}

#[test]
fn test_walker_next_to_cheerful_stays() {
    let mut city = City::default();
    for _ in 0..3 {
        city.tick();
    }
    let walker = city.get(Position::new(5, 5)).unwrap();
    assert_eq!(walker.kind(), OccupantKind::Walker);
    assert_eq!(walker.mood(), Some(Mood::Happy));
}

// ============================================================================
// Grid queries
// ============================================================================

#[test]
fn test_out_of_bounds_reads_as_empty() {
    let city = City::default();
    assert!(city.get_at(-1, 0).is_none());
    assert!(city.get_at(0, 25).is_none());
    assert!(!city.is_empty(-1, 0));
    assert!(!city.is_empty(25, 25));
    assert!(city.is_empty(1, 1));
    assert!(!city.is_empty(0, 0));
}

#[test]
fn test_count_equal_type_neighbors() {
    let mut city = City::new(5);
    city.place(Person::new(Position::new(1, 1)).into());
    city.place(Person::new(Position::new(0, 0)).into());
    city.place(Person::new(Position::new(2, 2)).into());
    city.place(Walker::new(Position::new(1, 2)).into());

    assert_eq!(city.count_equal_type_neighbors(1, 1), 2);
    assert_eq!(city.count_equal_type_neighbors(1, 2), 0);
    assert_eq!(city.count_equal_type_neighbors(4, 4), 0);
    assert_eq!(city.count_equal_type_neighbors(-1, 0), 0);
}

#[test]
fn test_set_relocates_and_returns_previous() {
    let mut city = City::new(4);
    let person: Occupant = Person::new(Position::new(0, 0)).into();
    assert!(city.set(Position::new(3, 2), Some(person)).is_none());
    assert_eq!(city.get(Position::new(3, 2)).unwrap().position(), Position::new(3, 2));

    let previous = city.set(Position::new(3, 2), None).unwrap();
    assert_eq!(previous.kind(), OccupantKind::Person);
    assert_eq!(city.occupant_count(), 0);
}

#[test]
#[should_panic]
fn test_set_out_of_bounds_panics() {
    let mut city = City::new(4);
    city.set(Position::new(4, 0), None);
}

#[test]
fn test_tick_counter() {
    let mut city = City::new(3);
    for expected in 1..=4 {
        city.tick();
        assert_eq!(city.current_tick(), expected);
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_in_bounds_matches_range(row in -40isize..40, column in -40isize..40) {
        let city = City::default();
        let expected = (0..25).contains(&row) && (0..25).contains(&column);
        prop_assert_eq!(city.in_bounds(row, column), expected);
    }

    #[test]
    fn prop_ticks_preserve_population(ticks in 0usize..40) {
        let mut city = City::default();
        for _ in 0..ticks {
            city.tick();
        }
        prop_assert_eq!(city.occupant_count(), 12);

        let empty = (0..25isize)
            .flat_map(|r| (0..25isize).map(move |c| (r, c)))
            .filter(|&(r, c)| city.is_empty(r, c))
            .count();
        prop_assert_eq!(empty, 625 - 12);
        assert_consistent(&city);
    }

    #[test]
    fn prop_random_population_stays_consistent(
        cells in prop::collection::btree_set((0usize..8, 0usize..8), 0..30),
        ticks in 1usize..10,
    ) {
        let mut city = City::new(8);
        for (i, &(row, column)) in cells.iter().enumerate() {
            let kind = OccupantKind::ALL[i % OccupantKind::ALL.len()];
            city.place(Occupant::new(kind, Position::new(row, column)));
        }
        for _ in 0..ticks {
            city.tick();
        }
        prop_assert_eq!(city.occupant_count(), cells.len());
        assert_consistent(&city);
    }
}
