//! Session registry: the single owner of every record created during a run.

mod names;

pub use names::*;

use std::collections::HashMap;
use std::convert::Infallible;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::models::{NewPet, Owner, OwnerId, Pet, PetId, Visit};

/// Registry errors.
#[derive(Error, Debug, PartialEq)]
pub enum ClinicError {
    #[error("Unknown owner: {0}")]
    UnknownOwner(OwnerId),

    #[error("Unknown pet: {0}")]
    UnknownPet(PetId),

    #[error("Owner already registered: {0}")]
    DuplicateOwner(String),
}

pub type ClinicResult<T> = Result<T, ClinicError>;

/// Outcome of [`Clinic::register_owner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// An owner with the same normalized name already existed
    Existing(OwnerId),
    /// A new owner was appended
    Created(OwnerId),
}

impl Registration {
    /// Handle of the owner, whether new or pre-existing.
    pub fn id(self) -> OwnerId {
        match self {
            Registration::Existing(id) | Registration::Created(id) => id,
        }
    }

    pub fn is_new(self) -> bool {
        matches!(self, Registration::Created(_))
    }
}

/// In-memory clinic session.
///
/// Owns all owners and pets. Owners are deduplicated by normalized name;
/// owners, pets and each pet's visits keep insertion order.
#[derive(Debug, Default)]
pub struct Clinic {
    owners: Vec<Owner>,
    owner_index: HashMap<String, OwnerId>,
    pets: Vec<Pet>,
}

impl Clinic {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Owners
    // =========================================================================

    /// Find an owner by name. The name is normalized before lookup.
    pub fn find_owner(&self, name: &str) -> Option<OwnerId> {
        self.owner_index.get(&normalize_name(name)).copied()
    }

    /// Append a new owner.
    ///
    /// Fails with [`ClinicError::DuplicateOwner`] if the normalized name is taken.
    pub fn add_owner(&mut self, name: &str, phone: String, address: String) -> ClinicResult<OwnerId> {
        let key = normalize_name(name);
        if self.owner_index.contains_key(&key) {
            return Err(ClinicError::DuplicateOwner(key));
        }
        Ok(self.insert_owner(key, phone, address))
    }

    /// Return the existing owner for `name`, or append a new one.
    ///
    /// `contact` is only invoked when the owner does not exist yet, and yields
    /// the `(phone, address)` pair for the new record.
    pub fn register_owner<F>(&mut self, name: &str, contact: F) -> Registration
    where
        F: FnOnce() -> (String, String),
    {
        match self.try_register_owner(name, || Ok::<_, Infallible>(contact())) {
            Ok(registration) => registration,
            Err(never) => match never {},
        }
    }

    /// Like [`register_owner`](Self::register_owner), for contact sources that can fail.
    ///
    /// Nothing is appended when `contact` returns an error.
    pub fn try_register_owner<F, E>(&mut self, name: &str, contact: F) -> Result<Registration, E>
    where
        F: FnOnce() -> Result<(String, String), E>,
    {
        if let Some(id) = self.find_owner(name) {
            return Ok(Registration::Existing(id));
        }
        let (phone, address) = contact()?;
        Ok(Registration::Created(self.insert_owner(normalize_name(name), phone, address)))
    }

    fn insert_owner(&mut self, key: String, phone: String, address: String) -> OwnerId {
        let id = OwnerId(self.owners.len());
        self.owners.push(Owner::new(key.clone(), phone, address));
        self.owner_index.insert(key, id);
        debug!(owner = %id, "owner registered");
        id
    }

    /// First registered owner whose name is similar (but not equal) to `name`.
    pub fn similar_owner(&self, name: &str) -> Option<&Owner> {
        let key = normalize_name(name);
        self.owners.iter().find(|o| is_similar_name(&o.name, &key))
    }

    /// Get an owner by handle.
    pub fn owner(&self, id: OwnerId) -> Option<&Owner> {
        self.owners.get(id.0)
    }

    /// Resolve a 1-based menu position to an owner handle.
    pub fn owner_at(&self, position: usize) -> Option<OwnerId> {
        (1..=self.owners.len())
            .contains(&position)
            .then(|| OwnerId(position - 1))
    }

    /// All owners in registration order.
    pub fn owners(&self) -> impl Iterator<Item = (OwnerId, &Owner)> {
        self.owners.iter().enumerate().map(|(i, o)| (OwnerId(i), o))
    }

    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    // =========================================================================
    // Pets
    // =========================================================================

    /// Append a pet owned by `owner`.
    pub fn add_pet(&mut self, fields: NewPet, owner: OwnerId) -> ClinicResult<PetId> {
        if self.owner(owner).is_none() {
            return Err(ClinicError::UnknownOwner(owner));
        }

        let id = PetId(self.pets.len());
        self.pets.push(Pet::new(fields, owner));
        debug!(pet = %id, owner = %owner, "pet registered");
        Ok(id)
    }

    /// Get a pet by handle.
    pub fn pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.get(id.0)
    }

    /// Owner of the given pet.
    pub fn pet_owner(&self, id: PetId) -> Option<&Owner> {
        self.pet(id).and_then(|pet| self.owner(pet.owner_id()))
    }

    /// Resolve a 1-based menu position to a pet handle.
    pub fn pet_at(&self, position: usize) -> Option<PetId> {
        (1..=self.pets.len())
            .contains(&position)
            .then(|| PetId(position - 1))
    }

    /// All pets in registration order.
    pub fn pets(&self) -> impl Iterator<Item = (PetId, &Pet)> {
        self.pets.iter().enumerate().map(|(i, p)| (PetId(i), p))
    }

    pub fn pet_count(&self) -> usize {
        self.pets.len()
    }

    // =========================================================================
    // Visits
    // =========================================================================

    /// Append a visit to the end of a pet's history.
    pub fn record_visit(
        &mut self,
        pet: PetId,
        date: NaiveDate,
        reason: String,
        diagnosis: String,
    ) -> ClinicResult<&Visit> {
        let record = self.pets.get_mut(pet.0).ok_or(ClinicError::UnknownPet(pet))?;
        let visit = record.push_visit(Visit {
            date,
            reason,
            diagnosis,
            pet,
        });
        debug!(pet = %pet, date = %visit.date, "visit recorded");
        Ok(visit)
    }
}
