//! Traits describing read-only static data.
//!
//! Oracles expose the character roster and enemy templates without
//! coupling the simulation to a concrete data source. The content crate
//! provides catalog-backed implementations; tests provide their own.

mod error;
mod npc;
mod roster;

pub use error::OracleError;
pub use npc::{EnemyOracle, EnemyTemplate};
pub use roster::{RosterEntry, RosterOracle};
