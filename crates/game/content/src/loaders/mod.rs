//! Content loaders for reading game data from files.
//!
//! Loaders convert RON/TOML files into the catalogs in [`crate::catalog`].
//! Malformed data is a startup error, surfaced with context via `anyhow`.

pub mod config;
pub mod enemies;
pub mod roster;

pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use roster::RosterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
