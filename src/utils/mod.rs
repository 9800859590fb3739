pub mod formatting;
pub mod config;

// Re-exports
pub use formatting::*;
pub use config::*;
