//! Visit models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PetId;

/// Date format used wherever a visit date is shown.
pub const VISIT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single dated clinic encounter. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    /// Day the visit was recorded
    pub date: NaiveDate,
    /// Reason for the visit
    pub reason: String,
    /// Diagnosis given
    pub diagnosis: String,
    /// Pet the visit belongs to
    pub pet: PetId,
}

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.date.format(VISIT_DATE_FORMAT))?;
        writeln!(f, "  Reason: {}", self.reason)?;
        write!(f, "  Diagnosis: {}", self.diagnosis)
    }
}
