//! Business operations behind the HTTP handlers
//!
//! Services validate request bodies, call the persistence layer and map the
//! results to wire models. Failures are `AppError`s carrying a `KennelError`
//! where the client is at fault.

pub mod breed;
pub mod dog;
