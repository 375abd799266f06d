//! Input surface supplied by the presentation layer.
//!
//! The presentation adapter polls the real devices; the simulation only
//! sees discrete [`InputEvent`]s and a [`HeldButtons`] mask per frame.

bitflags::bitflags! {
    /// Buttons held down during a frame (as opposed to edge-triggered
    /// events).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct HeldButtons: u8 {
        const SPRINT = 1 << 0;
        const INTERACT = 1 << 1;
    }
}

/// Discrete one-shot inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    /// Basic attack (fires a projectile).
    Attack,
    /// Elemental skill.
    Skill,
    /// Elemental burst.
    Burst,
    /// Switch to the party slot at this index (0-based).
    SwitchSlot(usize),
}
