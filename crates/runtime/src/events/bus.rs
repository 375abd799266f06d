//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{CombatEvent, FeedbackEvent, PartyEvent};

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Damage, effects, enemy lifecycle.
    Combat,
    /// Switching, falls, defeat.
    Party,
    /// One-shot user-facing messages.
    Feedback,
}

/// Event wrapper that carries the topic and typed event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Combat(CombatEvent),
    Party(PartyEvent),
    Feedback(FeedbackEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Combat(_) => Topic::Combat,
            Event::Party(_) => Topic::Party,
            Event::Feedback(_) => Topic::Feedback,
        }
    }
}

/// Per-topic broadcast channels toward the presentation layer.
///
/// Consumers subscribe to the topics they care about. Publishing is
/// best-effort: a topic without subscribers drops its events, and a slow
/// subscriber loses the oldest entries first (`broadcast` semantics).
/// Nothing on the simulation side ever blocks on the bus.
#[derive(Clone)]
pub struct EventBus {
    combat: broadcast::Sender<Event>,
    party: broadcast::Sender<Event>,
    feedback: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic.
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with the given capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            combat: broadcast::channel(capacity).0,
            party: broadcast::channel(capacity).0,
            feedback: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Combat => &self.combat,
            Topic::Party => &self.party,
            Topic::Feedback => &self.feedback,
        }
    }

    /// Publishes an event to its topic.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers on this topic; normal for headless runs.
            tracing::trace!("no subscribers for topic {:?}", topic);
        }
    }

    /// Subscribes to a single topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wilds_core::Color;

    #[test]
    fn events_route_to_their_topic_only() {
        let bus = EventBus::new();
        let mut feedback = bus.subscribe(Topic::Feedback);
        let mut party = bus.subscribe(Topic::Party);

        bus.publish(Event::Feedback(FeedbackEvent::banner("hit", Color::RED)));

        assert!(matches!(feedback.try_recv(), Ok(Event::Feedback(_))));
        assert!(party.try_recv().is_err());
    }
}
