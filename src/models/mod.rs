//! Aircraft landing domain models.
//!
//! Core data types for stating the problem and its solutions: aircraft with
//! landing windows and penalties, the pairwise separation matrix, the
//! immutable problem instance, and the schedule produced by a solve.

mod aircraft;
mod instance;
mod objective;
mod schedule;
mod separation;

pub use aircraft::Aircraft;
pub use instance::{Instance, ModelBuildError, DEFAULT_TRANSFER_SEED};
pub use objective::ObjectiveVariant;
pub use schedule::{LandingSlot, Schedule, Violation};
pub use separation::SeparationMatrix;
