use kennel_api::{DogResponse, requested_breed_id, validate_dog};
use kennel_common::KennelError;
use kennel_persistence::{DogData, PersistenceService};
use serde_json::Value;
use tracing::info;

use crate::error::AppError;

/// Validate a dog body, looking up the breed it names
async fn validate(persistence: &dyn PersistenceService, body: &Value) -> Result<DogData, AppError> {
    let breed_exists = match requested_breed_id(body) {
        Some(breed_id) => persistence.breed_exists(breed_id).await?,
        None => false,
    };

    Ok(validate_dog(body, breed_exists)?)
}

pub async fn find_all(persistence: &dyn PersistenceService) -> Result<Vec<DogResponse>, AppError> {
    let dogs = persistence.dog_find_all().await?;
    Ok(dogs.into_iter().map(DogResponse::from).collect())
}

pub async fn get(persistence: &dyn PersistenceService, id: i32) -> Result<DogResponse, AppError> {
    persistence
        .dog_get_by_id(id)
        .await?
        .map(DogResponse::from)
        .ok_or_else(|| KennelError::dog_not_found(id).into())
}

/// Fail with not found unless the dog is stored
pub async fn ensure_exists(persistence: &dyn PersistenceService, id: i32) -> Result<(), AppError> {
    if persistence.dog_exists(id).await? {
        Ok(())
    } else {
        Err(KennelError::dog_not_found(id).into())
    }
}

pub async fn create(persistence: &dyn PersistenceService, body: &Value) -> Result<DogResponse, AppError> {
    let data = validate(persistence, body).await?;
    let dog = persistence.dog_create(&data).await?;

    info!("Dog {} created: {}", dog.id, dog);
    Ok(dog.into())
}

/// Replace every field of a dog, including its breed
pub async fn update(
    persistence: &dyn PersistenceService,
    id: i32,
    body: &Value,
) -> Result<DogResponse, AppError> {
    let data = validate(persistence, body).await?;
    let dog = persistence
        .dog_update(id, &data)
        .await?
        .ok_or(KennelError::dog_not_found(id))?;

    info!("Dog {} updated: {}", dog.id, dog);
    Ok(dog.into())
}

pub async fn delete(persistence: &dyn PersistenceService, id: i32) -> Result<(), AppError> {
    if !persistence.dog_delete(id).await? {
        return Err(KennelError::dog_not_found(id).into());
    }

    info!("Dog {} deleted", id);
    Ok(())
}
