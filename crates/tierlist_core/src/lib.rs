//! Core domain logic for the tier list board.
//! This crate is the single source of truth for placement invariants.

pub mod color;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;

pub use color::hex::{HexColor, HexColorError};
pub use color::oklab::{OkLab, OkLch};
pub use color::pair::{ColorPair, ColorPairGenerator};
pub use config::{BoardConfig, ConfigError};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::id::{ItemIdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use model::item::{ImageRef, Item, ItemId, ItemKind};
pub use model::snapshot::BoardSnapshot;
pub use model::tier::{ContainerId, Tier, TierId, TierTemplate, POOL_CONTAINER_ID};
pub use service::placement_store::{PlacementError, PlacementStore};
pub use service::session::Session;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
