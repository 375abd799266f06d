//! Enemy catalog loader.

use std::path::Path;

use wilds_core::EnemyTemplate;

use crate::catalog::EnemyCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the enemy catalog from RON files.
///
/// RON format: `Vec<(String, EnemyTemplate)>` keyed by kind identifier.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<EnemyCatalog> {
        let content = read_file(path)?;
        let kinds: Vec<(String, EnemyTemplate)> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        for (kind, template) in &kinds {
            if template.max_hp <= 0.0 {
                anyhow::bail!("Enemy kind '{}' has non-positive max hp", kind);
            }
            if template.attack_interval <= 0.0 {
                anyhow::bail!("Enemy kind '{}' has non-positive attack interval", kind);
            }
        }

        Ok(EnemyCatalog::from_kinds(kinds))
    }
}
