//! Pet models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{OwnerId, Visit};

/// Fields collected when registering a pet, before it is linked to an owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    /// Age in years. Zero and negative values are accepted as entered.
    pub age: i64,
}

/// A patient animal, linked to exactly one owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    /// Pet name
    pub name: String,
    /// Species (e.g., "Dog", "Cat")
    pub species: String,
    /// Breed
    pub breed: String,
    /// Age in years
    pub age: i64,
    /// Owning client; fixed at creation
    owner: OwnerId,
    /// Visit history in insertion order; append-only
    history: Vec<Visit>,
}

impl Pet {
    pub(crate) fn new(fields: NewPet, owner: OwnerId) -> Self {
        Self {
            name: fields.name,
            species: fields.species,
            breed: fields.breed,
            age: fields.age,
            owner,
            history: Vec::new(),
        }
    }

    /// Handle of the owner this pet belongs to.
    pub fn owner_id(&self) -> OwnerId {
        self.owner
    }

    /// Visits recorded for this pet, oldest first.
    pub fn history(&self) -> &[Visit] {
        &self.history
    }

    pub(crate) fn push_visit(&mut self, visit: Visit) -> &Visit {
        self.history.push(visit);
        &self.history[self.history.len() - 1]
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pet: {} ({} - {}), Age: {} years",
            self.name, self.species, self.breed, self.age
        )
    }
}
