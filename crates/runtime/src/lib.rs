//! Per-frame orchestration for the combat simulation.
//!
//! This crate wires the pure logic in `wilds-core` into a drivable
//! [`Session`]: a presentation layer feeds it one [`FrameInput`] per frame
//! and subscribes to the [`EventBus`] for everything it should show. The
//! whole simulation runs synchronously inside [`Session::advance`]; the
//! bus only carries notifications out.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the tick driver and builder
//! - [`events`] provides the topic-based event bus
//! - [`effects`] owns live projectiles and area queries
//! - [`scheduler`] holds the time-ordered deferred-action queue
//! - [`spatial`] abstracts ray/volume queries over world geometry
//! - [`scenario`] seeds a session with spawns for headless runs
pub mod effects;
pub mod error;
pub mod events;
pub mod scenario;
pub mod scheduler;
pub mod session;
pub mod spatial;

mod combat;

pub use combat::deal_elemental_damage;
pub use effects::{AreaEffect, Projectile};
pub use error::RuntimeError;
pub use events::{CombatEvent, Event, EventBus, FeedbackEvent, PartyEvent, Topic};
pub use scenario::Scenario;
pub use scheduler::{DeferredAction, DeferredQueue};
pub use session::{FrameInput, HudSnapshot, Session, SessionBuilder};
pub use spatial::{RayHit, SpatialOracle, sphere_raycast};
