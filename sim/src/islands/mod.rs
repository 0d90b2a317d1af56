//! Floating islands: where they start and how they drift.

pub mod hover;
pub mod placement;

pub use hover::{apply_hover, HoverParams};
pub use placement::{default_island_specs, place_island, Island, IslandBand, IslandSpec};
