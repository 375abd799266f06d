//! Damage resolution and ability effect descriptors.
//!
//! All functions here are pure; the runtime's combat resolver is the only
//! caller that turns a [`DamageResolution`] into applied damage.

mod effect;
mod resolve;

pub use effect::{AbilityEffect, EffectShape};
pub use resolve::{DamageResolution, resolve};
