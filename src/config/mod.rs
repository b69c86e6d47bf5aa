//! Configuration and settings management.
//!
//! Server connection settings and their JSON persistence.

mod settings;

pub use settings::{ServerSettings, Settings};
