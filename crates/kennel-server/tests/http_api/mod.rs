//! HTTP API integration tests
//!
//! Tests for the breed, dog and health endpoints

pub mod dog_api_test;
pub mod health_api_test;
