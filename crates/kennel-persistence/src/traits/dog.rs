//! Dog persistence trait

use async_trait::async_trait;

use crate::model::{DogData, DogInfo};

/// Dog persistence operations
///
/// Writes fail with `KennelError::RelatedNotFound` when `breed_id` names no stored breed.
#[async_trait]
pub trait DogPersistence: Send + Sync {
    /// Find all dogs ordered by ID
    async fn dog_find_all(&self) -> anyhow::Result<Vec<DogInfo>>;

    /// Get a dog by its ID
    async fn dog_get_by_id(&self, id: i32) -> anyhow::Result<Option<DogInfo>>;

    /// Check if a dog exists
    async fn dog_exists(&self, id: i32) -> anyhow::Result<bool>;

    /// Create a new dog
    async fn dog_create(&self, data: &DogData) -> anyhow::Result<DogInfo>;

    /// Replace every field of an existing dog, `None` if it does not exist
    async fn dog_update(&self, id: i32, data: &DogData) -> anyhow::Result<Option<DogInfo>>;

    /// Delete a dog
    async fn dog_delete(&self, id: i32) -> anyhow::Result<bool>;
}
