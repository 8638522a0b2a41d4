//! Registry from occupant type names to constructors
//!
//! The text import format names each occupant by a string tag. Tags resolve
//! through this registry only; there is no open-ended lookup.

use ahash::AHashMap;

use crate::core::error::{CityError, Result};
use crate::core::types::{OccupantKind, Position};
use crate::entity::{Item, Occupant};

/// Builds an occupant at a position
pub type Constructor = Box<dyn Fn(Position) -> Result<Occupant> + Send + Sync>;

/// Registry for occupant constructors
pub struct OccupantRegistry {
    /// `None` marks a reserved tag whose constructor is not available
    constructors: AHashMap<String, Option<Constructor>>,
}

impl Default for OccupantRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl OccupantRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            constructors: AHashMap::new(),
        }
    }

    /// Registry holding every built-in kind under its type name
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in OccupantKind::ALL {
            registry.register(kind.name(), move |position| Ok(Occupant::new(kind, position)));
        }
        registry
    }

    /// Register (or replace) the constructor for `name`
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn(Position) -> Result<Occupant> + Send + Sync + 'static,
    {
        self.constructors.insert(name.into(), Some(Box::new(constructor)));
    }

    /// Make `name` another tag for a built-in kind
    pub fn register_alias(&mut self, name: impl Into<String>, kind: OccupantKind) {
        self.register(name, move |position| Ok(Occupant::new(kind, position)));
    }

    /// Know `name` without being able to build it
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.constructors.insert(name.into(), None);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered tags, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build the occupant tagged `name` at `position`
    pub fn instantiate(&self, name: &str, position: Position) -> Result<Occupant> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| CityError::UnknownOccupantType(name.to_string()))?
            .as_ref()
            .ok_or_else(|| CityError::ConstructorUnavailable(name.to_string()))?;

        let occupant = constructor(position).map_err(|e| match e {
            failure @ CityError::InstantiationFailure { .. } => failure,
            other => CityError::InstantiationFailure {
                kind: name.to_string(),
                reason: other.to_string(),
            },
        })?;

        if occupant.position() != position {
            return Err(CityError::InstantiationFailure {
                kind: name.to_string(),
                reason: format!("built at {} instead of {}", occupant.position(), position),
            });
        }
        Ok(occupant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_kind() {
        let registry = OccupantRegistry::with_defaults();
        for kind in OccupantKind::ALL {
            let occupant = registry.instantiate(kind.name(), Position::new(1, 2)).unwrap();
            assert_eq!(occupant.kind(), kind);
            assert_eq!(occupant.position(), Position::new(1, 2));
        }
        assert_eq!(registry.names().len(), 6);
    }

    #[test]
    fn test_unknown_name() {
        let registry = OccupantRegistry::with_defaults();
        assert!(matches!(
            registry.instantiate("Dragon", Position::new(0, 0)),
            Err(CityError::UnknownOccupantType(name)) if name == "Dragon"
        ));
    }

    #[test]
    fn test_reserved_name_is_unavailable() {
        let mut registry = OccupantRegistry::new();
        registry.reserve("Bus");
        assert!(registry.contains("Bus"));
        assert!(matches!(
            registry.instantiate("Bus", Position::new(0, 0)),
            Err(CityError::ConstructorUnavailable(_))
        ));
    }

    #[test]
    fn test_failing_constructor() {
        let mut registry = OccupantRegistry::new();
        registry.register("Broken", |_| Err(CityError::NotImplemented("Broken".into())));
        registry.register("Lost", |_| Ok(Occupant::new(OccupantKind::Person, Position::new(0, 0))));

        assert!(matches!(
            registry.instantiate("Broken", Position::new(1, 1)),
            Err(CityError::InstantiationFailure { .. })
        ));
        assert!(matches!(
            registry.instantiate("Lost", Position::new(1, 1)),
            Err(CityError::InstantiationFailure { .. })
        ));
    }

    #[test]
    fn test_alias() {
        let mut registry = OccupantRegistry::with_defaults();
        registry.register_alias("Schelling", OccupantKind::SchellingPerson);
        let occupant = registry.instantiate("Schelling", Position::new(3, 3)).unwrap();
        assert_eq!(occupant.kind(), OccupantKind::SchellingPerson);
    }
}
