//! HTTP API handlers
//!
//! - `breed`, `dog` - list/create and retrieve/update/delete handlers
//! - `health` - liveness and readiness probes
//! - `route` - route table

pub mod breed;
pub mod dog;
pub mod health;
pub mod route;
