//! Data models module
//!
//! - `config` - Configuration management
//! - `app_state` - Application state shared across handlers
//! - `response` - Error and health response bodies

pub mod app_state;
pub mod config;
pub mod response;

pub use app_state::AppState;
pub use config::{Cli, Configuration};
pub use response::{ErrorDetail, HealthStatus};
