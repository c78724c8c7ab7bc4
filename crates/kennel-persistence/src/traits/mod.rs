//! Persistence traits for the storage abstraction layer
//!
//! Handlers and services depend on these traits only, so the SQL backend can be
//! swapped for a test double.

pub mod breed;
pub mod dog;

pub use breed::BreedPersistence;
pub use dog::DogPersistence;

use async_trait::async_trait;

/// Unified persistence service trait
#[async_trait]
pub trait PersistenceService: BreedPersistence + DogPersistence + Send + Sync {
    /// Name of the database backend in use, e.g. `sqlite`
    fn backend_name(&self) -> &'static str;

    /// Health check for the storage backend
    async fn health_check(&self) -> anyhow::Result<()>;
}
