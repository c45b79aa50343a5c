//! Domain models for the clinic bookkeeping system.

mod ids;
mod owner;
mod pet;
mod visit;

pub use ids::*;
pub use owner::*;
pub use pet::*;
pub use visit::*;
