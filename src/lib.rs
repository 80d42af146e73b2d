//! # CaveSketch
//!
//! Document model for the sketches drawn over a cave survey's plan and
//! extended elevation: freehand passage walls, map symbols, labels and
//! cross-section markers, with undo/redo and snapping support for an
//! interactive editor.
//!
//! ## Architecture
//!
//! CaveSketch is organized as a workspace with multiple crates:
//!
//! 1. **cavesketch-core** - Geometry utilities, colours, station identities
//! 2. **cavesketch-settings** - Defaults for new details, JSON/TOML persistence
//! 3. **cavesketch-sketch** - The sketch document, history and spatial queries
//! 4. **cavesketch** - This facade, re-exporting the above plus logging setup

use std::path::Path;

use anyhow::Context;

pub use cavesketch_core::{
    distance_to_segment, simplification_epsilon, simplify, Colour, GeometryError, Point, Rect,
    StationId,
};
pub use cavesketch_settings::{SettingsError, SketchSettings};
pub use cavesketch_sketch::{
    CrossSection, CrossSectionDetail, Detail, DetailGeometry, DetailId, DetailKind, History,
    HistoryEntry, PathDetail, Sketch, SketchError, SketchObject, Symbol, SymbolDetail, TextDetail,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support (defaults to `info`)
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }

    Ok(())
}

/// Creates an empty sketch using the settings stored at `settings_path`.
///
/// Missing settings files fall back to the defaults; unreadable or invalid
/// ones are reported.
pub fn new_sketch_with_settings(settings_path: &Path) -> anyhow::Result<Sketch> {
    let settings = SketchSettings::load_or_default(settings_path).with_context(|| {
        format!(
            "failed to load sketch settings from {}",
            settings_path.display()
        )
    })?;
    tracing::info!(colour = %settings.default_colour, "creating sketch");
    Ok(Sketch::from_settings(&settings)?)
}
