//! Wire representations of breeds and dogs

use kennel_common::BreedSize;
use kennel_persistence::{BreedInfo, DogInfo};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedResponse {
    pub id: i32,
    pub name: String,
    pub size: BreedSize,
    pub friendliness: i32,
    pub trainability: i32,
    pub shedding_amount: i32,
    pub exercise_needs: i32,
}

impl From<BreedInfo> for BreedResponse {
    fn from(info: BreedInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            size: info.size,
            friendliness: info.friendliness,
            trainability: info.trainability,
            shedding_amount: info.shedding_amount,
            exercise_needs: info.exercise_needs,
        }
    }
}

/// A dog with its breed nested under `breed`; `breed_id` is the writable link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogResponse {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub color: String,
    pub favorite_food: String,
    pub favorite_toy: String,
    pub breed: BreedResponse,
    pub breed_id: i32,
}

impl From<DogInfo> for DogResponse {
    fn from(info: DogInfo) -> Self {
        let breed_id = info.breed_id();
        Self {
            id: info.id,
            name: info.name,
            age: info.age,
            gender: info.gender,
            color: info.color,
            favorite_food: info.favorite_food,
            favorite_toy: info.favorite_toy,
            breed: BreedResponse::from(info.breed),
            breed_id,
        }
    }
}
