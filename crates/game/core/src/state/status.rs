//! Elemental status carried by enemies.
//!
//! At most one element is applied at a time: every hit overwrites the
//! previous application and resets the timer (last-hit-wins, no stacking).

use crate::element::Element;

/// The element currently lingering on an enemy, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementalStatus {
    applied: Option<Element>,
    remaining: f32,
}

impl ElementalStatus {
    pub const fn none() -> Self {
        Self {
            applied: None,
            remaining: 0.0,
        }
    }

    /// The applied element, or `None` once the status has decayed.
    pub fn applied(&self) -> Option<Element> {
        self.applied
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.applied.is_some()
    }

    /// Records a new application, overwriting any prior element and
    /// resetting the timer.
    pub fn apply(&mut self, element: Element, duration: f32) {
        self.applied = Some(element);
        self.remaining = duration.max(0.0);
    }

    /// Decrements the timer by `dt`. Returns true if the status expired on
    /// this tick (the applied element was cleared).
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.applied.is_none() {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        if self.remaining <= 0.0 {
            self.applied = None;
            true
        } else {
            false
        }
    }
}
