//! Ability cooldown bookkeeping.

use strum::Display;

/// Abilities gated by a cooldown timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityKind {
    Attack,
    Skill,
    Burst,
    Switch,
}

/// Remaining cooldown per ability, decremented every tick and floored at
/// zero. An ability is usable when its remaining time is ≤ 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityCooldowns {
    attack: f32,
    skill: f32,
    burst: f32,
    switch: f32,
}

impl AbilityCooldowns {
    /// All abilities ready.
    pub const fn ready() -> Self {
        Self {
            attack: 0.0,
            skill: 0.0,
            burst: 0.0,
            switch: 0.0,
        }
    }

    pub fn remaining(&self, kind: AbilityKind) -> f32 {
        match kind {
            AbilityKind::Attack => self.attack,
            AbilityKind::Skill => self.skill,
            AbilityKind::Burst => self.burst,
            AbilityKind::Switch => self.switch,
        }
    }

    pub fn is_ready(&self, kind: AbilityKind) -> bool {
        self.remaining(kind) <= 0.0
    }

    pub fn set(&mut self, kind: AbilityKind, seconds: f32) {
        let slot = match kind {
            AbilityKind::Attack => &mut self.attack,
            AbilityKind::Skill => &mut self.skill,
            AbilityKind::Burst => &mut self.burst,
            AbilityKind::Switch => &mut self.switch,
        };
        *slot = seconds.max(0.0);
    }

    /// Advances every timer by `dt`, flooring at zero.
    pub fn tick(&mut self, dt: f32) {
        self.attack = (self.attack - dt).max(0.0);
        self.skill = (self.skill - dt).max(0.0);
        self.burst = (self.burst - dt).max(0.0);
        self.switch = (self.switch - dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_never_go_negative() {
        let mut cooldowns = AbilityCooldowns::ready();
        cooldowns.set(AbilityKind::Skill, 1.0);
        cooldowns.tick(5.0);
        assert_eq!(cooldowns.remaining(AbilityKind::Skill), 0.0);
        assert!(cooldowns.is_ready(AbilityKind::Skill));
    }

    #[test]
    fn ticking_affects_all_timers() {
        let mut cooldowns = AbilityCooldowns::ready();
        cooldowns.set(AbilityKind::Attack, 0.5);
        cooldowns.set(AbilityKind::Burst, 20.0);
        cooldowns.tick(0.5);
        assert!(cooldowns.is_ready(AbilityKind::Attack));
        assert_eq!(cooldowns.remaining(AbilityKind::Burst), 19.5);
    }
}
