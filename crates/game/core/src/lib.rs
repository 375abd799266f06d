//! Deterministic combat and character-state logic shared across clients.
//!
//! `wilds-core` defines the canonical rules of the combat loop: elemental
//! reactions, party and cooldown management, enemy behavior, and damage
//! resolution. It performs no I/O and emits no events; callers inspect the
//! outcome values returned by each operation. The runtime crate drives these
//! types once per frame and translates outcomes into presentation events.
pub mod combat;
pub mod config;
pub mod element;
pub mod enemy;
pub mod env;
pub mod input;
pub mod party;
pub mod state;

pub use combat::{AbilityEffect, DamageResolution, EffectShape, resolve};
pub use config::GameConfig;
pub use element::{Element, Reaction, ReactionTable};
pub use enemy::{EnemyAgent, EnemyHitReport, EnemyState, EnemyTickReport};
pub use env::{EnemyOracle, EnemyTemplate, OracleError, RosterEntry, RosterOracle};
pub use input::{HeldButtons, InputEvent};
pub use party::{
    AbilityCooldowns, AbilityKind, AbilityRejected, ActiveDamageReport, AutoSwitch, PartyError,
    PartyState, SwitchOutcome, SwitchRejected,
};
pub use state::{
    Color, Combatant, DamageOutcome, ElementalStatus, EntityId, HealOutcome, Vec3,
};
