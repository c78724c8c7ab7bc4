//! Kennel API - HTTP wire models and input validation
//!
//! This crate provides:
//! - Response models for breeds and dogs
//! - Field validators and per-entity validation of JSON request bodies

pub mod model;
pub mod validation;

pub use model::{BreedResponse, DogResponse};
pub use validation::{requested_breed_id, validate_breed, validate_dog};
