//! Domain models for Jgility.
//!
//! # Entities
//!
//! - [`ProductStory`]: A requirement on the product backlog with a write-once id, an effort
//!   estimate and a priority. Publishes property changes.
//! - [`Team`]: A named, ordered list of [`Person`]s. Publishes property changes.
//! - [`Project`]: A named container holding sets of members and [`Plan`]s. Does not publish
//!   changes.
//!
//! # Values
//!
//! - [`Person`]: Identity of a participant, held by value in teams and projects.
//! - [`Plan`]: A named calendar span, such as a release or an iteration.
//! - [`Priority`], [`RequirementKind`]: Closed enumerations with upper-case wire names.
//!
//! # Capabilities
//!
//! [`Participant`], [`Plannable`], [`Requirement`] and [`Effort`] describe what an entity
//! offers independent of its concrete type.

mod change;
mod person;
mod plan;
mod priority;
mod project;
mod story;
mod team;

pub use change::*;
pub use person::*;
pub use plan::*;
pub use priority::*;
pub use project::*;
pub use story::*;
pub use team::*;
