//! Game configuration loader.

use std::path::Path;

use wilds_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Every field of [`GameConfig`] is optional in the file; omitted fields
/// keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"max_stamina = 150.0\nsprint_speed = 18.0\n")
            .expect("write");

        let config = ConfigLoader::load(file.path()).expect("valid config");
        assert_eq!(config.max_stamina, 150.0);
        assert_eq!(config.sprint_speed, 18.0);
        // Untouched fields keep their defaults.
        assert_eq!(config.attack_cooldown, 0.5);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"max_stamina = [not a number]").expect("write");
        assert!(ConfigLoader::load(file.path()).is_err());
    }
}
