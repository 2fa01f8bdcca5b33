//! Process configuration for the scam intelligence binaries: environment
//! settings and log output.

pub mod env;
pub mod logging;

pub use env::AppConfig;
pub use logging::init_tracing;
