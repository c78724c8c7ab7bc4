//! Kennel Persistence - Database entities and persistence layer
//!
//! This crate provides:
//! - SeaORM entity definitions for the `breed` and `dog` tables
//! - Persistence trait abstractions
//! - Domain model types for persistence operations
//! - The SQL backend and schema bootstrap

pub mod entity;
pub mod model;
pub mod schema;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;

// Re-export persistence traits
pub use traits::{BreedPersistence, DogPersistence, PersistenceService};

// Re-export SQL backend
pub use sql::SqlPersistService;

// Re-export model types
pub use model::{BreedData, BreedInfo, DogData, DogInfo};
