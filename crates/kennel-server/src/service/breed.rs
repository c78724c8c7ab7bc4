use kennel_api::{BreedResponse, validate_breed};
use kennel_common::KennelError;
use kennel_persistence::PersistenceService;
use serde_json::Value;
use tracing::info;

use crate::error::AppError;

pub async fn find_all(persistence: &dyn PersistenceService) -> Result<Vec<BreedResponse>, AppError> {
    let breeds = persistence.breed_find_all().await?;
    Ok(breeds.into_iter().map(BreedResponse::from).collect())
}

pub async fn get(persistence: &dyn PersistenceService, id: i32) -> Result<BreedResponse, AppError> {
    persistence
        .breed_get_by_id(id)
        .await?
        .map(BreedResponse::from)
        .ok_or_else(|| KennelError::breed_not_found(id).into())
}

/// Fail with not found unless the breed is stored
pub async fn ensure_exists(persistence: &dyn PersistenceService, id: i32) -> Result<(), AppError> {
    if persistence.breed_exists(id).await? {
        Ok(())
    } else {
        Err(KennelError::breed_not_found(id).into())
    }
}

pub async fn create(persistence: &dyn PersistenceService, body: &Value) -> Result<BreedResponse, AppError> {
    let data = validate_breed(body)?;
    let breed = persistence.breed_create(&data).await?;

    info!(
        "Breed {} created: {} ({})",
        breed.id,
        breed,
        breed.size.label()
    );
    Ok(breed.into())
}

/// Replace every field of a breed
pub async fn update(
    persistence: &dyn PersistenceService,
    id: i32,
    body: &Value,
) -> Result<BreedResponse, AppError> {
    let data = validate_breed(body)?;
    let breed = persistence
        .breed_update(id, &data)
        .await?
        .ok_or(KennelError::breed_not_found(id))?;

    info!(
        "Breed {} updated: {} ({})",
        breed.id,
        breed,
        breed.size.label()
    );
    Ok(breed.into())
}

/// Delete a breed together with its dogs
pub async fn delete(persistence: &dyn PersistenceService, id: i32) -> Result<(), AppError> {
    let dogs = persistence
        .breed_delete(id)
        .await?
        .ok_or(KennelError::breed_not_found(id))?;

    info!("Breed {} deleted with {} dog(s)", id, dogs);
    Ok(())
}
