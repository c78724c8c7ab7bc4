//! Breed persistence trait

use async_trait::async_trait;

use crate::model::{BreedData, BreedInfo};

/// Breed persistence operations
#[async_trait]
pub trait BreedPersistence: Send + Sync {
    /// Find all breeds ordered by name, ties broken by id
    async fn breed_find_all(&self) -> anyhow::Result<Vec<BreedInfo>>;

    /// Get a breed by its ID
    async fn breed_get_by_id(&self, id: i32) -> anyhow::Result<Option<BreedInfo>>;

    /// Check if a breed exists
    async fn breed_exists(&self, id: i32) -> anyhow::Result<bool>;

    /// Create a new breed and return it with its assigned ID
    async fn breed_create(&self, data: &BreedData) -> anyhow::Result<BreedInfo>;

    /// Replace every field of an existing breed, `None` if it does not exist
    async fn breed_update(&self, id: i32, data: &BreedData) -> anyhow::Result<Option<BreedInfo>>;

    /// Delete a breed and all of its dogs in one transaction.
    ///
    /// Returns the number of dogs removed with it, or `None` if the breed does not exist.
    async fn breed_delete(&self, id: i32) -> anyhow::Result<Option<u64>>;
}
