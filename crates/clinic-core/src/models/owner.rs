//! Owner models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A clinic client. Identified by its normalized name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    /// Normalized (trimmed, title-cased) name
    pub name: String,
    /// Contact phone, free text
    pub phone: String,
    /// Postal address, free text
    pub address: String,
}

impl Owner {
    /// Create an owner. The name is expected to be normalized already.
    pub fn new(name: String, phone: String, address: String) -> Self {
        Self {
            name,
            phone,
            address,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Owner: {}, Phone: {}, Address: {}",
            self.name, self.phone, self.address
        )
    }
}
