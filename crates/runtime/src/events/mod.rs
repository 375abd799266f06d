//! Topic-based event routing toward the presentation layer.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{CombatEvent, FeedbackEvent, PartyEvent};
