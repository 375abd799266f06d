//! Party controller: the team of playable characters.
//!
//! Owns the combatants, tracks which one is active, and gates every player
//! action behind cooldowns, stamina, and the terminal defeat state.
//! Operations return outcome values describing what happened; the runtime
//! turns those into presentation events.

mod cooldowns;

pub use cooldowns::{AbilityCooldowns, AbilityKind};

use arrayvec::ArrayVec;

use crate::combat::{AbilityEffect, EffectShape};
use crate::config::GameConfig;
use crate::element::Element;
use crate::env::RosterEntry;
use crate::state::{Color, Combatant, DamageOutcome, HealOutcome};

/// Fatal construction/configuration errors. These fail fast at startup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PartyError {
    #[error("party roster is empty")]
    EmptyRoster,

    #[error("party roster exceeds {max} members")]
    RosterTooLarge { max: usize },

    #[error("duplicate party member '{name}'")]
    DuplicateMember { name: String },

    #[error("'{name}' is not a party member")]
    UnknownMember { name: String },
}

/// Non-fatal reasons a switch request was rejected. Reported as transient
/// feedback, never propagated as a failure.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SwitchRejected {
    #[error("switch is on cooldown ({remaining:.1}s)")]
    OnCooldown { remaining: f32 },

    #[error("'{name}' is already active")]
    AlreadyActive { name: String },

    #[error("'{name}' has fallen")]
    TargetFallen { name: String },

    #[error("no party member in slot {slot}")]
    UnknownSlot { slot: usize },

    #[error("'{name}' is not a party member")]
    UnknownMember { name: String },

    #[error("the party has been defeated")]
    Defeated,
}

/// Non-fatal reasons an ability invocation was rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AbilityRejected {
    #[error("{kind} is on cooldown ({remaining:.1}s)")]
    OnCooldown { kind: AbilityKind, remaining: f32 },

    #[error("the party has been defeated")]
    Defeated,
}

/// A successful switch, with everything the presentation needs.
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchOutcome {
    pub slot: usize,
    pub name: String,
    pub element: Element,
    pub color: Color,
}

/// How the controller reacted to the active character falling.
#[derive(Clone, Debug, PartialEq)]
pub enum AutoSwitch {
    /// Control moved to the first living teammate in roster order.
    Switched(SwitchOutcome),
    /// Every member has fallen; the party entered the terminal defeat
    /// state.
    Defeated,
}

/// Report from damaging the active character.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveDamageReport {
    pub target: String,
    pub outcome: DamageOutcome,
    /// Present only when this damage felled the active character.
    pub auto_switch: Option<AutoSwitch>,
}

/// The team of combatants plus shared resources (stamina, cooldowns).
///
/// `active` always indexes a non-fallen member unless the whole team has
/// fallen, which is terminal until an external reset.
#[derive(Clone, Debug)]
pub struct PartyState {
    members: ArrayVec<Combatant, { GameConfig::MAX_PARTY_SIZE }>,
    active: usize,
    stamina: f32,
    cooldowns: AbilityCooldowns,
    sprinting: bool,
    defeated: bool,
}

impl PartyState {
    /// Builds a party in roster order. The first member starts active.
    pub fn new(entries: &[RosterEntry], config: &GameConfig) -> Result<Self, PartyError> {
        if entries.is_empty() {
            return Err(PartyError::EmptyRoster);
        }
        if entries.len() > GameConfig::MAX_PARTY_SIZE {
            return Err(PartyError::RosterTooLarge {
                max: GameConfig::MAX_PARTY_SIZE,
            });
        }

        let mut members = ArrayVec::new();
        for entry in entries {
            if members
                .iter()
                .any(|member: &Combatant| member.name() == entry.name)
            {
                return Err(PartyError::DuplicateMember {
                    name: entry.name.clone(),
                });
            }
            members.push(Combatant::from_entry(entry));
        }

        Ok(Self {
            members,
            active: 0,
            stamina: config.max_stamina,
            cooldowns: AbilityCooldowns::ready(),
            sprinting: false,
            defeated: false,
        })
    }

    // ========================================================================
    // Read-only accessors
    // ========================================================================

    pub fn active(&self) -> &Combatant {
        &self.members[self.active]
    }

    pub fn active_slot(&self) -> usize {
        self.active
    }

    pub fn member(&self, name: &str) -> Option<&Combatant> {
        self.members.iter().find(|member| member.name() == name)
    }

    pub fn members(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub fn cooldowns(&self) -> &AbilityCooldowns {
        &self.cooldowns
    }

    /// Current ground speed. Zero once defeated.
    pub fn movement_speed(&self, config: &GameConfig) -> f32 {
        if self.defeated {
            0.0
        } else if self.sprinting {
            config.sprint_speed
        } else {
            config.walk_speed
        }
    }

    // ========================================================================
    // Switching
    // ========================================================================

    /// Explicit switch request by slot index.
    pub fn switch_slot(
        &mut self,
        slot: usize,
        config: &GameConfig,
    ) -> Result<SwitchOutcome, SwitchRejected> {
        if self.defeated {
            return Err(SwitchRejected::Defeated);
        }
        if slot >= self.members.len() {
            return Err(SwitchRejected::UnknownSlot { slot });
        }
        if !self.cooldowns.is_ready(AbilityKind::Switch) {
            return Err(SwitchRejected::OnCooldown {
                remaining: self.cooldowns.remaining(AbilityKind::Switch),
            });
        }
        if slot == self.active {
            return Err(SwitchRejected::AlreadyActive {
                name: self.members[slot].name().to_owned(),
            });
        }
        if self.members[slot].is_fallen() {
            return Err(SwitchRejected::TargetFallen {
                name: self.members[slot].name().to_owned(),
            });
        }

        Ok(self.activate(slot, config))
    }

    /// Explicit switch request by character name.
    pub fn switch(
        &mut self,
        name: &str,
        config: &GameConfig,
    ) -> Result<SwitchOutcome, SwitchRejected> {
        let slot = self
            .members
            .iter()
            .position(|member| member.name() == name)
            .ok_or_else(|| SwitchRejected::UnknownMember {
                name: name.to_owned(),
            })?;
        self.switch_slot(slot, config)
    }

    fn activate(&mut self, slot: usize, config: &GameConfig) -> SwitchOutcome {
        self.active = slot;
        self.cooldowns
            .set(AbilityKind::Switch, config.switch_cooldown);
        let member = &self.members[slot];
        SwitchOutcome {
            slot,
            name: member.name().to_owned(),
            element: member.element(),
            color: member.color(),
        }
    }

    // ========================================================================
    // Per-frame update
    // ========================================================================

    /// Advances cooldowns and stamina by `dt`.
    ///
    /// Sprinting holds only while the button is down and stamina remains;
    /// otherwise stamina regenerates toward max. Both directions clamp to
    /// `[0, max_stamina]`.
    pub fn tick(&mut self, dt: f32, sprint_held: bool, config: &GameConfig) {
        self.cooldowns.tick(dt);

        self.sprinting = sprint_held && self.stamina > 0.0 && !self.defeated;
        if self.sprinting {
            self.stamina -= config.stamina_drain_rate * dt;
        } else if self.stamina < config.max_stamina {
            self.stamina += config.stamina_regen_rate * dt;
        }
        self.stamina = self.stamina.clamp(0.0, config.max_stamina);
    }

    // ========================================================================
    // Abilities
    // ========================================================================

    /// Fires a projectile attributed to the active character (×1 attack).
    pub fn invoke_basic_attack(
        &mut self,
        config: &GameConfig,
    ) -> Result<AbilityEffect, AbilityRejected> {
        self.check_ability(AbilityKind::Attack)?;

        let active = self.active();
        let effect = AbilityEffect {
            element: active.element(),
            damage: active.atk(),
            shape: EffectShape::Bolt {
                speed: config.projectile_speed,
                lifetime: config.projectile_lifetime,
                spawn_offset: config.projectile_spawn_offset,
            },
        };
        self.cooldowns
            .set(AbilityKind::Attack, config.attack_cooldown);
        Ok(effect)
    }

    /// Places the expanding skill volume ahead of the player (×1.5 attack),
    /// resolved after the configured delay.
    pub fn invoke_skill(&mut self, config: &GameConfig) -> Result<AbilityEffect, AbilityRejected> {
        self.check_ability(AbilityKind::Skill)?;

        let active = self.active();
        let effect = AbilityEffect {
            element: active.element(),
            damage: active.atk() * config.skill_damage_multiplier,
            shape: EffectShape::Area {
                radius: config.skill_radius,
                delay: config.skill_resolve_delay,
                forward_offset: config.skill_forward_offset,
            },
        };
        let cooldown = active.skill_cooldown();
        self.cooldowns.set(AbilityKind::Skill, cooldown);
        Ok(effect)
    }

    /// Detonates the large burst volume around the player (×4 attack),
    /// resolved immediately.
    pub fn invoke_burst(&mut self, config: &GameConfig) -> Result<AbilityEffect, AbilityRejected> {
        self.check_ability(AbilityKind::Burst)?;

        let active = self.active();
        let effect = AbilityEffect {
            element: active.element(),
            damage: active.atk() * config.burst_damage_multiplier,
            shape: EffectShape::Area {
                radius: config.burst_radius,
                delay: 0.0,
                forward_offset: 0.0,
            },
        };
        let cooldown = active.burst_cooldown();
        self.cooldowns.set(AbilityKind::Burst, cooldown);
        Ok(effect)
    }

    fn check_ability(&self, kind: AbilityKind) -> Result<(), AbilityRejected> {
        if self.defeated {
            return Err(AbilityRejected::Defeated);
        }
        if !self.cooldowns.is_ready(kind) {
            return Err(AbilityRejected::OnCooldown {
                kind,
                remaining: self.cooldowns.remaining(kind),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Damage and healing
    // ========================================================================

    /// Applies damage to the active character. If that fells them, control
    /// auto-switches to the first living teammate in roster order within
    /// the same call; with nobody left the party enters the terminal
    /// defeat state.
    pub fn damage_active(&mut self, amount: f32, config: &GameConfig) -> ActiveDamageReport {
        let target = self.members[self.active].name().to_owned();
        let outcome = self.members[self.active].apply_damage(amount);

        let auto_switch = match outcome {
            DamageOutcome::Fell => Some(self.handle_fallen(config)),
            _ => None,
        };

        ActiveDamageReport {
            target,
            outcome,
            auto_switch,
        }
    }

    /// Reacts to the active character falling. The auto-switch bypasses
    /// the switch cooldown; losing a character must never strand the
    /// player without control.
    fn handle_fallen(&mut self, config: &GameConfig) -> AutoSwitch {
        match self.members.iter().position(|member| !member.is_fallen()) {
            Some(slot) => AutoSwitch::Switched(self.activate(slot, config)),
            None => {
                self.defeated = true;
                AutoSwitch::Defeated
            }
        }
    }

    /// Heals a single member, reviving them if fallen.
    pub fn heal_member(&mut self, name: &str, amount: f32) -> Result<HealOutcome, PartyError> {
        let member = self
            .members
            .iter_mut()
            .find(|member| member.name() == name)
            .ok_or_else(|| PartyError::UnknownMember {
                name: name.to_owned(),
            })?;
        Ok(member.heal(amount))
    }

    /// Fully heals every member, reviving the fallen. Does not lift the
    /// terminal defeat state.
    pub fn heal_team(&mut self) -> Vec<(String, HealOutcome)> {
        self.members
            .iter_mut()
            .map(|member| {
                let amount = member.max_hp();
                (member.name().to_owned(), member.heal(amount))
            })
            .collect()
    }
}
