//! Data-driven content definitions and loaders.
//!
//! This crate houses the built-in character roster and enemy catalog and
//! provides loaders for overriding them from data files:
//! - Character roster (data-driven via RON)
//! - Enemy catalog (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed through the oracle traits in `wilds-core` and never
//! appears in game state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{EnemyCatalog, RosterCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, EnemyLoader, RosterLoader};
