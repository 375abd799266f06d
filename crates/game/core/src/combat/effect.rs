//! Descriptors for the damage-dealing effects abilities spawn.
//!
//! Invoking an ability returns one of these; the runtime instantiates the
//! matching projectile or area query and routes hits through damage
//! resolution. The party controller itself never touches world geometry.

use crate::element::Element;

/// A damage-dealing effect attributed to the character that spawned it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityEffect {
    pub element: Element,
    /// Damage per qualifying hit, already scaled by the ability
    /// multiplier.
    pub damage: f32,
    pub shape: EffectShape,
}

/// Geometry of an ability's damage query.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectShape {
    /// Traveling point query fired along the aim direction. Consumed by
    /// its first qualifying hit or after `lifetime` seconds.
    Bolt {
        speed: f32,
        lifetime: f32,
        /// Spawn distance ahead of the aim origin.
        spawn_offset: f32,
    },
    /// Stationary volume query. Resolves all qualifying targets within
    /// `radius` once, after `delay` seconds (0 = immediately).
    Area {
        radius: f32,
        delay: f32,
        /// Distance ahead of the player where the volume is centered.
        forward_offset: f32,
    },
}
