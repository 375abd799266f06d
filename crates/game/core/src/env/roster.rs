//! Character roster definitions and oracle interface.

use crate::element::Element;
use crate::state::Color;

/// Static per-character stats, loaded once and never mutated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    pub name: String,
    pub element: Element,
    /// Signature color used for the character model and feedback text.
    pub color: Color,
    pub base_hp: f32,
    pub base_atk: f32,
    /// Elemental skill cooldown in seconds.
    pub skill_cooldown: f32,
    /// Elemental burst cooldown in seconds.
    pub burst_cooldown: f32,
}

/// Oracle providing roster entries by character name.
///
/// `names` preserves roster order; slot inputs (switch-to-slot-N) and the
/// auto-switch on a fallen character both resolve through that order.
pub trait RosterOracle: Send + Sync {
    /// Returns the entry for a character name, `None` if absent.
    fn entry(&self, name: &str) -> Option<RosterEntry>;

    /// All character names in roster order.
    fn names(&self) -> Vec<String>;
}
