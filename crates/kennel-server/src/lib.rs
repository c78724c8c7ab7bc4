// Main library module for Kennel - a breed and dog registry served over HTTP

// Module declarations
pub mod api; // API handlers and routes
pub mod error; // Error handling and types
pub mod middleware; // HTTP middleware
pub mod model; // Configuration, application state and response bodies
pub mod service; // Business services
pub mod startup; // Application startup utilities

pub use error::AppError;
pub use model::{AppState, Configuration};
