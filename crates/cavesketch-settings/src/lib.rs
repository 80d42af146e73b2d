//! CaveSketch Settings Crate
//!
//! Handles the defaults applied to new sketch details and their persistence.

pub mod config;
pub mod error;

pub use config::SketchSettings;
pub use error::{SettingsError, SettingsResult};
