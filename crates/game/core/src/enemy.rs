//! Enemy agents.
//!
//! Each agent runs a small per-tick state machine: decay any applied
//! element, face the player, pursue while out of range, attack on a fixed
//! interval while in range. Death is terminal; dead agents are removed
//! from the active set by the runtime and never ticked again.

use crate::element::Element;
use crate::env::EnemyTemplate;
use crate::state::{ElementalStatus, EntityId, Vec3};

/// Behavior state, decided each tick from the distance to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyState {
    /// Moving toward the player.
    Pursue,
    /// In range, attacking on the template's interval.
    Attack,
    /// Hp reached zero; no further ticks.
    Dead,
}

/// What an agent did during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnemyTickReport {
    /// Damage dealt to the active character this tick, if any.
    pub attack: Option<f32>,
    /// The applied element expired this tick.
    pub status_expired: bool,
}

/// What a hit did to an agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyHitReport {
    pub hp_remaining: f32,
    pub died: bool,
}

/// A single AI-driven enemy.
#[derive(Clone, Debug)]
pub struct EnemyAgent {
    id: EntityId,
    position: Vec3,
    /// Unit vector on the ground plane, kept facing the player.
    facing: Vec3,
    hp: f32,
    max_hp: f32,
    speed: f32,
    attack_range: f32,
    attack_damage: f32,
    attack_interval: f32,
    attack_cooldown: f32,
    status: ElementalStatus,
    state: EnemyState,
}

impl EnemyAgent {
    pub fn spawn(id: EntityId, template: &EnemyTemplate, position: Vec3) -> Self {
        Self {
            id,
            position,
            facing: Vec3::new(0.0, 0.0, 1.0),
            hp: template.max_hp,
            max_hp: template.max_hp,
            speed: template.speed,
            attack_range: template.attack_range,
            attack_damage: template.attack_damage,
            attack_interval: template.attack_interval,
            attack_cooldown: 0.0,
            status: ElementalStatus::none(),
            state: EnemyState::Pursue,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn facing(&self) -> Vec3 {
        self.facing
    }

    pub fn hp(&self) -> f32 {
        self.hp
    }

    pub fn max_hp(&self) -> f32 {
        self.max_hp
    }

    pub fn status(&self) -> &ElementalStatus {
        &self.status
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state == EnemyState::Dead
    }

    /// Advances the agent by one tick against the player's position.
    pub fn tick(&mut self, dt: f32, player_position: Vec3) -> EnemyTickReport {
        if self.is_dead() {
            return EnemyTickReport::default();
        }

        let status_expired = self.status.tick(dt);

        if let Some(direction) = self.position.direction_xz_to(player_position) {
            self.facing = direction;
        }

        let mut attack = None;
        if self.position.distance_xz(player_position) > self.attack_range {
            self.state = EnemyState::Pursue;
            self.position += self.facing * (self.speed * dt);
        } else {
            self.state = EnemyState::Attack;
            if self.attack_cooldown <= 0.0 {
                attack = Some(self.attack_damage);
                self.attack_cooldown = self.attack_interval;
            }
        }
        self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);

        EnemyTickReport {
            attack,
            status_expired,
        }
    }

    /// Applies already-resolved damage and records the hitting element
    /// (overwriting any prior status, timer reset to `status_duration`).
    /// A no-op on dead agents.
    pub fn apply_damage(
        &mut self,
        amount: f32,
        source_element: Element,
        status_duration: f32,
    ) -> EnemyHitReport {
        if self.is_dead() {
            return EnemyHitReport {
                hp_remaining: 0.0,
                died: false,
            };
        }

        let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
        self.hp = (self.hp - amount).max(0.0);
        self.status.apply(source_element, status_duration);

        let died = self.hp <= 0.0;
        if died {
            self.hp = 0.0;
            self.state = EnemyState::Dead;
        }
        EnemyHitReport {
            hp_remaining: self.hp,
            died,
        }
    }
}
