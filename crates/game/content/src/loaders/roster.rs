//! Character roster loader.

use std::path::Path;

use wilds_core::RosterEntry;

use crate::catalog::RosterCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the character roster from RON files.
///
/// RON format: `Vec<RosterEntry>`, in roster order (slot inputs and the
/// auto-switch on a fallen character follow file order).
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<RosterCatalog> {
        let content = read_file(path)?;
        let entries: Vec<RosterEntry> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        if entries.is_empty() {
            anyhow::bail!("Roster file {} contains no characters", path.display());
        }
        for entry in &entries {
            if entry.base_hp <= 0.0 {
                anyhow::bail!("Character '{}' has non-positive base hp", entry.name);
            }
            if entry.skill_cooldown < 0.0 || entry.burst_cooldown < 0.0 {
                anyhow::bail!("Character '{}' has a negative cooldown", entry.name);
            }
        }

        Ok(RosterCatalog::from_entries(entries))
    }
}
