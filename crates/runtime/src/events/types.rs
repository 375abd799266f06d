//! Event payloads published during a tick.

use serde::{Deserialize, Serialize};

use wilds_core::{Color, EffectShape, Element, EntityId, Reaction, Vec3};

/// Combat occurrences: effects spawning and resolving, damage landing,
/// enemies attacking or dying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CombatEvent {
    /// A projectile or area query was instantiated. The presentation
    /// creates the matching visual entity.
    EffectSpawned {
        id: EntityId,
        element: Element,
        position: Vec3,
        shape: EffectShape,
    },

    /// An effect resolved or timed out. The matching visual is destroyed.
    EffectExpired { id: EntityId },

    /// Resolved damage was delivered to an enemy.
    DamageDealt {
        target: EntityId,
        amount: f32,
        reaction: Option<Reaction>,
    },

    /// The element applied to an enemy decayed.
    StatusExpired { target: EntityId },

    /// An enemy attacked the active character.
    EnemyAttacked {
        id: EntityId,
        target: String,
        damage: f32,
    },

    /// An enemy reached zero hp and left the active set.
    EnemyDefeated { id: EntityId, position: Vec3 },
}

/// Party-level occurrences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PartyEvent {
    /// The active character changed (explicit switch or auto-switch).
    Switched {
        slot: usize,
        name: String,
        element: Element,
        color: Color,
    },

    /// A member's hp reached zero.
    MemberFallen { name: String },

    /// A fallen member was healed back up.
    MemberRevived { name: String },

    /// A waypoint fully healed the team.
    TeamHealed,

    /// Every member has fallen; input is disabled until an external reset.
    Defeated,

    /// The player dropped below the out-of-bounds height. The presentation
    /// should respawn the controller.
    PlayerOutOfBounds,
}

/// One-shot user-facing message: damage numbers, reaction names, status
/// lines. `offset` is a screen-space hint relative to center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub text: String,
    pub color: Color,
    pub offset: (f32, f32),
    pub scale: f32,
    /// Seconds the message stays on screen.
    pub duration: f32,
}

impl FeedbackEvent {
    /// Banner in the upper-middle of the screen.
    pub fn banner(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            offset: (0.0, 0.25),
            scale: 2.0,
            duration: 2.0,
        }
    }

    /// Hp change readout next to the party bars.
    pub fn hp_readout(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            offset: (-0.2, 0.2),
            scale: 2.0,
            duration: 2.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}
