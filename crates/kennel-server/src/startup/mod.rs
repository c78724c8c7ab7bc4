//! Application startup utilities module.
//!
//! Logging, HTTP server construction and shutdown handling used by the binary.

mod http;
mod logging;
mod shutdown;

pub use http::{api_server, configure_app};
pub use logging::{LogRotation, LoggingConfig, LoggingGuard, init_logging};
pub use shutdown::{GracefulShutdown, ShutdownSignal, wait_for_shutdown_signal};
