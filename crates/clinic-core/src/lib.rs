//! Clinic Core Library
//!
//! In-memory bookkeeping for a small veterinary clinic: owners, their pets,
//! and each pet's visit history.
//!
//! # Architecture
//!
//! ```text
//!                  ┌──────────────────────────────┐
//!                  │            Clinic            │
//!                  │  owners: Vec<Owner>          │
//!                  │  owner_index: name → OwnerId │
//!                  │  pets: Vec<Pet>              │
//!                  └──────────────┬───────────────┘
//!                                 │ OwnerId
//!                                 ▼
//!                    Pet ──owns──▶ history: Vec<Visit>
//! ```
//!
//! # Core Principle
//!
//! **Records are append-only.** Nothing is edited or removed once created, so
//! `OwnerId`/`PetId` handles stay valid for the whole session.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Owner, Pet, Visit, typed ids)
//! - [`registry`]: The `Clinic` session and owner name normalization
//! - [`clock`]: Date source for visit stamping

pub mod clock;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use models::{NewPet, Owner, OwnerId, Pet, PetId, Visit, VISIT_DATE_FORMAT};
pub use registry::{normalize_name, Clinic, ClinicError, ClinicResult, Registration};
