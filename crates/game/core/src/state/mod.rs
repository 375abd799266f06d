//! State types shared by the party, enemies, and the runtime.

mod combatant;
mod common;
mod status;

pub use combatant::{Combatant, DamageOutcome, HealOutcome};
pub use common::{Color, EntityId, Vec3};
pub use status::ElementalStatus;
