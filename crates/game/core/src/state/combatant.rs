//! Playable character combat state.
//!
//! A [`Combatant`] is the damageable half of a party member: hit points,
//! attack stat, and the fallen flag. Mutation happens only through
//! [`Combatant::apply_damage`] and [`Combatant::heal`], which maintain the
//! invariant `hp == 0 ⟺ fallen` and report what happened so the owning
//! party controller can react (auto-switch, revival bookkeeping).

use crate::element::Element;
use crate::env::RosterEntry;

use super::Color;

/// A damageable character built from a roster entry. Never destroyed while
/// the game runs; fallen members stay in the party and can be revived.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    element: Element,
    color: Color,
    hp: f32,
    max_hp: f32,
    atk: f32,
    skill_cooldown: f32,
    burst_cooldown: f32,
    fallen: bool,
}

/// What a call to [`Combatant::apply_damage`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DamageOutcome {
    /// Target was already fallen; hp and state unchanged.
    AlreadyFallen,
    /// Damage applied, target still standing.
    Applied { hp_remaining: f32 },
    /// Damage applied and the target fell.
    Fell,
}

/// What a call to [`Combatant::heal`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HealOutcome {
    /// Hp increased (or was already capped at max).
    Healed { hp: f32 },
    /// The fallen state was cleared before healing.
    Revived { hp: f32 },
}

impl Combatant {
    pub fn from_entry(entry: &RosterEntry) -> Self {
        Self {
            name: entry.name.clone(),
            element: entry.element,
            color: entry.color,
            hp: entry.base_hp,
            max_hp: entry.base_hp,
            atk: entry.base_atk,
            skill_cooldown: entry.skill_cooldown,
            burst_cooldown: entry.burst_cooldown,
            fallen: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn hp(&self) -> f32 {
        self.hp
    }

    pub fn max_hp(&self) -> f32 {
        self.max_hp
    }

    pub fn atk(&self) -> f32 {
        self.atk
    }

    /// Roster-defined skill cooldown, applied at invocation time.
    pub fn skill_cooldown(&self) -> f32 {
        self.skill_cooldown
    }

    /// Roster-defined burst cooldown, applied at invocation time.
    pub fn burst_cooldown(&self) -> f32 {
        self.burst_cooldown
    }

    pub fn is_fallen(&self) -> bool {
        self.fallen
    }

    /// Subtracts `amount` from hp, clamping at 0. Reaching 0 transitions to
    /// fallen. A no-op on already-fallen targets.
    ///
    /// Negative or non-finite amounts are clamped to 0 and the call becomes
    /// a no-op.
    pub fn apply_damage(&mut self, amount: f32) -> DamageOutcome {
        let amount = sanitize_amount(amount);
        if self.fallen {
            return DamageOutcome::AlreadyFallen;
        }

        self.hp = (self.hp - amount).max(0.0);
        if self.hp <= 0.0 {
            self.hp = 0.0;
            self.fallen = true;
            DamageOutcome::Fell
        } else {
            DamageOutcome::Applied {
                hp_remaining: self.hp,
            }
        }
    }

    /// Restores up to `amount` hp, capped at max (no overheal). A positive
    /// amount on a fallen combatant clears the fallen state first
    /// (revival). A zero amount never revives.
    ///
    /// Negative or non-finite amounts are clamped to 0 and the call becomes
    /// a no-op.
    pub fn heal(&mut self, amount: f32) -> HealOutcome {
        let amount = sanitize_amount(amount);
        if amount <= 0.0 {
            return HealOutcome::Healed { hp: self.hp };
        }

        let revived = self.fallen;
        self.fallen = false;
        self.hp = (self.hp + amount).min(self.max_hp);

        if revived {
            HealOutcome::Revived { hp: self.hp }
        } else {
            HealOutcome::Healed { hp: self.hp }
        }
    }
}

fn sanitize_amount(amount: f32) -> f32 {
    if amount.is_finite() { amount.max(0.0) } else { 0.0 }
}
