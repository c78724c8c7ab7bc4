//! Domain model types for the persistence abstraction layer
//!
//! These types are used as arguments and return values of the persistence
//! traits, decoupled from the SeaORM entity definitions.

use std::fmt::{Display, Formatter};

use kennel_common::{BreedSize, KennelError};
use serde::{Deserialize, Serialize};

use crate::entity::{breed, dog};

/// A stored breed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedInfo {
    pub id: i32,
    pub name: String,
    pub size: BreedSize,
    pub friendliness: i32,
    pub trainability: i32,
    pub shedding_amount: i32,
    pub exercise_needs: i32,
}

impl Display for BreedInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl TryFrom<breed::Model> for BreedInfo {
    type Error = KennelError;

    fn try_from(model: breed::Model) -> Result<Self, Self::Error> {
        let size = model.size.parse::<BreedSize>().map_err(|e| {
            KennelError::IntegrityError(format!("breed '{}' has {}", model.id, e))
        })?;

        Ok(Self {
            id: model.id,
            name: model.name,
            size,
            friendliness: model.friendliness,
            trainability: model.trainability,
            shedding_amount: model.shedding_amount,
            exercise_needs: model.exercise_needs,
        })
    }
}

/// A stored dog together with the breed it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogInfo {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub color: String,
    pub favorite_food: String,
    pub favorite_toy: String,
    pub breed: BreedInfo,
}

impl DogInfo {
    pub fn breed_id(&self) -> i32 {
        self.breed.id
    }

    /// Join a dog row with its breed row.
    ///
    /// A missing breed means the foreign key was violated outside this service.
    pub fn from_models(dog: dog::Model, breed: Option<breed::Model>) -> Result<Self, KennelError> {
        let breed = match breed {
            Some(b) if b.id == dog.breed_id => BreedInfo::try_from(b)?,
            _ => {
                return Err(KennelError::IntegrityError(format!(
                    "dog '{}' references missing breed '{}'",
                    dog.id, dog.breed_id
                )));
            }
        };

        Ok(Self {
            id: dog.id,
            name: dog.name,
            age: dog.age,
            gender: dog.gender,
            color: dog.color,
            favorite_food: dog.favorite_food,
            favorite_toy: dog.favorite_toy,
            breed,
        })
    }
}

impl Display for DogInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {} - {}", self.name, self.age, self.breed.name)
    }
}

/// Validated breed fields for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedData {
    pub name: String,
    pub size: BreedSize,
    pub friendliness: i32,
    pub trainability: i32,
    pub shedding_amount: i32,
    pub exercise_needs: i32,
}

/// Validated dog fields for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogData {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub color: String,
    pub favorite_food: String,
    pub favorite_toy: String,
    pub breed_id: i32,
}
