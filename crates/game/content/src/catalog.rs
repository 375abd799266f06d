//! Built-in catalogs backing the core oracle traits.
//!
//! The defaults cover the shipped cast and baseline creature; data files
//! loaded through [`crate::loaders`] replace them wholesale.

use wilds_core::{Color, Element, EnemyOracle, EnemyTemplate, RosterEntry, RosterOracle};

/// Roster-order character catalog.
#[derive(Clone, Debug)]
pub struct RosterCatalog {
    entries: Vec<RosterEntry>,
}

impl RosterCatalog {
    /// The shipped four-character cast.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                RosterEntry {
                    name: "Traveler".into(),
                    element: Element::Anemo,
                    color: Color::YELLOW,
                    base_hp: 100.0,
                    base_atk: 10.0,
                    skill_cooldown: 5.0,
                    burst_cooldown: 15.0,
                },
                RosterEntry {
                    name: "Amber".into(),
                    element: Element::Pyro,
                    color: Color::ORANGE,
                    base_hp: 80.0,
                    base_atk: 12.0,
                    skill_cooldown: 8.0,
                    burst_cooldown: 20.0,
                },
                RosterEntry {
                    name: "Kaeya".into(),
                    element: Element::Cryo,
                    color: Color::AZURE,
                    base_hp: 90.0,
                    base_atk: 11.0,
                    skill_cooldown: 6.0,
                    burst_cooldown: 18.0,
                },
                RosterEntry {
                    name: "Lisa".into(),
                    element: Element::Electro,
                    color: Color::VIOLET,
                    base_hp: 70.0,
                    base_atk: 15.0,
                    skill_cooldown: 7.0,
                    burst_cooldown: 22.0,
                },
            ],
        }
    }

    /// Builds a catalog from explicit entries (e.g. a loaded data file).
    pub fn from_entries(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }
}

impl RosterOracle for RosterCatalog {
    fn entry(&self, name: &str) -> Option<RosterEntry> {
        self.entries.iter().find(|entry| entry.name == name).cloned()
    }

    fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }
}

/// Enemy templates by kind identifier.
#[derive(Clone, Debug)]
pub struct EnemyCatalog {
    kinds: Vec<(String, EnemyTemplate)>,
}

impl EnemyCatalog {
    /// Kind identifier of the baseline creature present in every catalog.
    pub const SLIME: &'static str = "slime";

    pub fn builtin() -> Self {
        Self {
            kinds: vec![(Self::SLIME.to_owned(), EnemyTemplate::default())],
        }
    }

    pub fn from_kinds(kinds: Vec<(String, EnemyTemplate)>) -> Self {
        Self { kinds }
    }
}

impl EnemyOracle for EnemyCatalog {
    fn template(&self, kind: &str) -> Option<EnemyTemplate> {
        self.kinds
            .iter()
            .find(|(name, _)| name == kind)
            .map(|(_, template)| *template)
    }
}
