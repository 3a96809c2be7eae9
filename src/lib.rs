//! Domain entities for Jgility, an agile project-management tool.
//!
//! Entities validate every field on construction and on each setter call. [`Team`] and
//! [`ProductStory`] notify subscribed listeners after every effective mutation;
//! [`Project`] is a plain validated container.
//!
//! [`Team`]: models::Team
//! [`ProductStory`]: models::ProductStory
//! [`Project`]: models::Project

pub mod config;
pub mod error;
pub mod models;
pub mod validation;
pub mod xml;

pub use error::{CoreError, Result};
