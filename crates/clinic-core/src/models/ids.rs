//! Typed handles into the clinic's record collections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to an owner stored in a [`Clinic`](crate::Clinic).
///
/// Handles are positions in insertion order; records are never removed, so a
/// handle stays valid for the lifetime of the session that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(pub(crate) usize);

/// Handle to a pet stored in a [`Clinic`](crate::Clinic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PetId(pub(crate) usize);

impl OwnerId {
    /// Zero-based position in the owner collection.
    pub fn index(self) -> usize {
        self.0
    }
}

impl PetId {
    /// Zero-based position in the pet collection.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner#{}", self.0 + 1)
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pet#{}", self.0 + 1)
    }
}
