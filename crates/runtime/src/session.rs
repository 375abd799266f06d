//! The session: one simulated world, advanced one frame at a time.
//!
//! [`Session::advance`] is the only mutation entry point. Each call runs
//! the whole tick synchronously in a stable order (player input, party
//! update, enemies, projectiles, deferred actions, cleanup), so there is
//! never concurrent access to any state. The presentation layer reads
//! state back through [`Session::hud`] and the iterators, and listens on
//! the event bus for one-shot occurrences.

use wilds_core::{
    AbilityEffect, AbilityKind, AutoSwitch, Color, DamageOutcome, EffectShape, Element, EnemyAgent,
    EnemyTemplate, EntityId, GameConfig, HealOutcome, HeldButtons, InputEvent, OracleError,
    PartyState, RosterEntry, RosterOracle, SwitchOutcome, SwitchRejected, Vec3,
};
use wilds_content::RosterCatalog;

use crate::combat::deal_elemental_damage;
use crate::effects::{AreaEffect, Projectile, ProjectileStep};
use crate::error::RuntimeError;
use crate::events::{CombatEvent, Event, EventBus, FeedbackEvent, PartyEvent, Topic};
use crate::scheduler::{DeferredAction, DeferredQueue};
use crate::spatial::SpatialOracle;

/// Everything the presentation layer reports about one frame.
#[derive(Clone, Debug)]
pub struct FrameInput {
    /// Seconds elapsed since the previous frame.
    pub dt: f32,
    /// Where the player controller currently stands.
    pub player_position: Vec3,
    /// Camera position projectiles are aimed from.
    pub aim_origin: Vec3,
    /// Camera forward vector. Does not need to be unit length.
    pub aim_direction: Vec3,
    /// Buttons currently held.
    pub held: HeldButtons,
    /// Discrete inputs that fired this frame.
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    /// A frame with no input, aiming straight ahead.
    pub fn idle(dt: f32, player_position: Vec3) -> Self {
        Self {
            dt,
            player_position,
            aim_origin: player_position,
            aim_direction: Vec3::new(0.0, 0.0, 1.0),
            held: HeldButtons::empty(),
            events: Vec::new(),
        }
    }

    pub fn with_events(mut self, events: Vec<InputEvent>) -> Self {
        self.events = events;
        self
    }

    pub fn holding(mut self, held: HeldButtons) -> Self {
        self.held = held;
        self
    }

    pub fn aiming(mut self, origin: Vec3, direction: Vec3) -> Self {
        self.aim_origin = origin;
        self.aim_direction = direction;
        self
    }
}

/// Read-only per-frame snapshot for HUD rendering.
#[derive(Clone, Debug)]
pub struct HudSnapshot {
    pub active_name: String,
    pub active_element: Element,
    pub active_color: Color,
    pub hp: f32,
    pub max_hp: f32,
    pub stamina: f32,
    pub max_stamina: f32,
    pub attack_cooldown: f32,
    pub skill_cooldown: f32,
    pub burst_cooldown: f32,
    pub switch_cooldown: f32,
    pub movement_speed: f32,
    pub defeated: bool,
}

/// Builder for [`Session`]. Configuration mistakes (unknown character
/// names, bad rosters) fail here, before the first frame.
pub struct SessionBuilder {
    config: GameConfig,
    roster: Option<Box<dyn RosterOracle>>,
    draft: Option<Vec<String>>,
    statics: Option<Box<dyn SpatialOracle>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            roster: None,
            draft: None,
            statics: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Roster source. Defaults to the built-in catalog.
    pub fn roster(mut self, oracle: impl RosterOracle + 'static) -> Self {
        self.roster = Some(Box::new(oracle));
        self
    }

    /// Party lineup by character name, in slot order. Defaults to the
    /// whole roster.
    pub fn draft<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Static world geometry for projectile obstruction tests.
    pub fn statics(mut self, oracle: impl SpatialOracle + 'static) -> Self {
        self.statics = Some(Box::new(oracle));
        self
    }

    pub fn build(self) -> Result<Session, RuntimeError> {
        let roster: Box<dyn RosterOracle> = self
            .roster
            .unwrap_or_else(|| Box::new(RosterCatalog::builtin()));
        let names = self.draft.unwrap_or_else(|| roster.names());

        let mut entries = Vec::with_capacity(names.len());
        for name in &names {
            let entry = roster
                .entry(name)
                .ok_or_else(|| OracleError::UnknownCharacter { name: name.clone() })?;
            entries.push(entry);
        }

        let party = PartyState::new(&entries, &self.config)?;
        tracing::info!(members = entries.len(), "session ready");

        Ok(Session {
            config: self.config,
            entries,
            party,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            areas: Vec::new(),
            deferred: DeferredQueue::new(),
            waypoints: Vec::new(),
            statics: self.statics,
            bus: EventBus::new(),
            clock: 0.0,
            next_entity: 1,
            player_position: Vec3::ZERO,
            below_bounds: false,
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running world: the party, the live enemy set, in-flight effects, and
/// the deferred-action queue, all advanced by [`Session::advance`].
pub struct Session {
    config: GameConfig,
    /// Roster entries the party was drafted from; used by [`Session::reset`].
    entries: Vec<RosterEntry>,
    party: PartyState,
    enemies: Vec<EnemyAgent>,
    projectiles: Vec<Projectile>,
    areas: Vec<AreaEffect>,
    deferred: DeferredQueue,
    waypoints: Vec<Vec3>,
    statics: Option<Box<dyn SpatialOracle>>,
    bus: EventBus,
    /// Accumulated game time in seconds.
    clock: f64,
    next_entity: u32,
    player_position: Vec3,
    below_bounds: bool,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    // ========================================================================
    // World setup
    // ========================================================================

    pub fn spawn_enemy(&mut self, template: &EnemyTemplate, position: Vec3) -> EntityId {
        let id = self.allocate_entity();
        self.enemies.push(EnemyAgent::spawn(id, template, position));
        id
    }

    pub fn add_waypoint(&mut self, position: Vec3) {
        self.waypoints.push(position);
    }

    /// Rebuilds the party from its original roster entries and clears
    /// in-flight effects. The external restart path out of defeat.
    pub fn reset(&mut self) -> Result<(), RuntimeError> {
        self.party = PartyState::new(&self.entries, &self.config)?;
        self.projectiles.clear();
        self.areas.clear();
        self.deferred = DeferredQueue::new();
        self.below_bounds = false;
        tracing::info!("session reset");
        Ok(())
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn party(&self) -> &PartyState {
        &self.party
    }

    pub fn enemies(&self) -> impl Iterator<Item = &EnemyAgent> {
        self.enemies.iter()
    }

    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn subscribe(&self, topic: Topic) -> tokio::sync::broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn hud(&self) -> HudSnapshot {
        let active = self.party.active();
        let cooldowns = self.party.cooldowns();
        HudSnapshot {
            active_name: active.name().to_owned(),
            active_element: active.element(),
            active_color: active.color(),
            hp: active.hp(),
            max_hp: active.max_hp(),
            stamina: self.party.stamina(),
            max_stamina: self.config.max_stamina,
            attack_cooldown: cooldowns.remaining(AbilityKind::Attack),
            skill_cooldown: cooldowns.remaining(AbilityKind::Skill),
            burst_cooldown: cooldowns.remaining(AbilityKind::Burst),
            switch_cooldown: cooldowns.remaining(AbilityKind::Switch),
            movement_speed: self.party.movement_speed(&self.config),
            defeated: self.party.is_defeated(),
        }
    }

    // ========================================================================
    // Frame advance
    // ========================================================================

    /// Runs one simulation tick. Stable order: bounds check, discrete
    /// inputs, waypoint interaction, party update, enemies, projectiles,
    /// deferred actions, removal of defeated enemies.
    pub fn advance(&mut self, frame: &FrameInput) {
        let dt = frame.dt.max(0.0);
        self.clock += f64::from(dt);
        self.player_position = frame.player_position;

        self.check_bounds(frame);
        self.handle_inputs(frame);
        self.handle_interaction(frame);
        self.party
            .tick(dt, frame.held.contains(HeldButtons::SPRINT), &self.config);
        self.tick_enemies(dt);
        self.tick_projectiles(dt);
        self.run_deferred();
        self.sweep_defeated_enemies();
    }

    fn check_bounds(&mut self, frame: &FrameInput) {
        let below = frame.player_position.y < self.config.out_of_bounds_y;
        if below && !self.below_bounds {
            self.bus.publish(Event::Party(PartyEvent::PlayerOutOfBounds));
        }
        self.below_bounds = below;
    }

    fn handle_inputs(&mut self, frame: &FrameInput) {
        for event in &frame.events {
            match *event {
                InputEvent::Attack => match self.party.invoke_basic_attack(&self.config) {
                    Ok(effect) => self.spawn_effect(effect, frame),
                    Err(rejection) => tracing::debug!(%rejection, "attack rejected"),
                },
                InputEvent::Skill => match self.party.invoke_skill(&self.config) {
                    Ok(effect) => {
                        self.announce_ability("Skill", 2.0);
                        self.spawn_effect(effect, frame);
                    }
                    Err(rejection) => tracing::debug!(%rejection, "skill rejected"),
                },
                InputEvent::Burst => match self.party.invoke_burst(&self.config) {
                    Ok(effect) => {
                        self.announce_ability("Burst", 2.5);
                        self.spawn_effect(effect, frame);
                    }
                    Err(rejection) => tracing::debug!(%rejection, "burst rejected"),
                },
                InputEvent::SwitchSlot(slot) => {
                    match self.party.switch_slot(slot, &self.config) {
                        Ok(outcome) => self.publish_switch(outcome),
                        Err(rejection @ SwitchRejected::TargetFallen { .. }) => {
                            self.bus.publish(Event::Feedback(FeedbackEvent::banner(
                                "Character has fallen!",
                                Color::ORANGE,
                            )));
                            tracing::debug!(%rejection, "switch rejected");
                        }
                        Err(rejection) => tracing::debug!(%rejection, "switch rejected"),
                    }
                }
            }
        }
    }

    fn announce_ability(&self, ability: &str, scale: f32) {
        let active = self.party.active();
        self.bus.publish(Event::Feedback(
            FeedbackEvent::banner(format!("{}'s {ability}!", active.name()), active.color())
                .with_scale(scale),
        ));
    }

    fn spawn_effect(&mut self, effect: AbilityEffect, frame: &FrameInput) {
        let id = self.allocate_entity();
        let forward_flat = Vec3::new(frame.aim_direction.x, 0.0, frame.aim_direction.z)
            .normalized()
            .unwrap_or(Vec3::new(0.0, 0.0, 1.0));

        let position = match effect.shape {
            EffectShape::Bolt {
                speed,
                lifetime,
                spawn_offset,
            } => {
                let direction = frame
                    .aim_direction
                    .normalized()
                    .unwrap_or(Vec3::new(0.0, 0.0, 1.0));
                let origin = frame.aim_origin + direction * spawn_offset;
                self.projectiles.push(Projectile::spawn(
                    id,
                    origin,
                    direction,
                    speed,
                    lifetime,
                    effect.damage,
                    effect.element,
                ));
                origin
            }
            EffectShape::Area {
                radius,
                delay,
                forward_offset,
            } => {
                let center = frame.player_position + forward_flat * forward_offset;
                self.areas.push(AreaEffect::new(
                    id,
                    center,
                    radius,
                    effect.damage,
                    effect.element,
                ));
                self.deferred
                    .schedule(self.clock + f64::from(delay), id, DeferredAction::ResolveArea);
                center
            }
        };

        self.bus.publish(Event::Combat(CombatEvent::EffectSpawned {
            id,
            element: effect.element,
            position,
            shape: effect.shape,
        }));
    }

    fn handle_interaction(&mut self, frame: &FrameInput) {
        if !frame.held.contains(HeldButtons::INTERACT) || self.party.is_defeated() {
            return;
        }
        let near_waypoint = self
            .waypoints
            .iter()
            .any(|w| w.distance_xz(frame.player_position) <= self.config.waypoint_radius);
        if !near_waypoint {
            return;
        }
        // Idempotence guard: a fully healthy team has nothing to gain, and
        // skipping keeps the feedback from firing every held frame.
        if !self.party.members().any(|m| m.hp() < m.max_hp()) {
            return;
        }

        for (name, outcome) in self.party.heal_team() {
            if matches!(outcome, HealOutcome::Revived { .. }) {
                self.bus
                    .publish(Event::Party(PartyEvent::MemberRevived { name }));
            }
        }
        self.bus.publish(Event::Party(PartyEvent::TeamHealed));
        self.bus.publish(Event::Feedback(FeedbackEvent::banner(
            "Team fully healed!",
            Color::CYAN,
        )));
    }

    fn tick_enemies(&mut self, dt: f32) {
        // Enemies idle once the run is over.
        if self.party.is_defeated() {
            return;
        }

        let player = self.player_position;
        for index in 0..self.enemies.len() {
            let report = self.enemies[index].tick(dt, player);
            let id = self.enemies[index].id();

            if report.status_expired {
                self.bus
                    .publish(Event::Combat(CombatEvent::StatusExpired { target: id }));
            }
            if let Some(damage) = report.attack {
                self.apply_enemy_attack(id, damage);
                if self.party.is_defeated() {
                    break;
                }
            }
        }
    }

    fn apply_enemy_attack(&mut self, enemy: EntityId, damage: f32) {
        let report = self.party.damage_active(damage, &self.config);

        self.bus.publish(Event::Combat(CombatEvent::EnemyAttacked {
            id: enemy,
            target: report.target.clone(),
            damage,
        }));
        self.bus.publish(Event::Feedback(FeedbackEvent::hp_readout(
            format!("-{} HP", damage.round() as i64),
            Color::RED,
        )));

        if matches!(report.outcome, DamageOutcome::Fell) {
            self.bus.publish(Event::Party(PartyEvent::MemberFallen {
                name: report.target.clone(),
            }));
            self.bus.publish(Event::Feedback(FeedbackEvent::banner(
                format!("{} has fallen!", report.target),
                Color::RED,
            )));
        }

        match report.auto_switch {
            Some(AutoSwitch::Switched(outcome)) => self.publish_switch(outcome),
            Some(AutoSwitch::Defeated) => {
                tracing::info!("party defeated");
                self.bus.publish(Event::Party(PartyEvent::Defeated));
                self.bus.publish(Event::Feedback(
                    FeedbackEvent::banner("All characters have fallen.", Color::RED)
                        .with_scale(3.0),
                ));
            }
            None => {}
        }
    }

    fn tick_projectiles(&mut self, dt: f32) {
        let projectiles = std::mem::take(&mut self.projectiles);
        let mut survivors = Vec::with_capacity(projectiles.len());

        for mut projectile in projectiles {
            // Collider set is rebuilt per projectile so a kill earlier in
            // this pass can't be hit again.
            let colliders = self.enemy_colliders();
            let step = projectile.advance(
                dt,
                &colliders,
                self.config.enemy_hit_radius,
                self.statics.as_deref(),
            );

            match step {
                ProjectileStep::Flying => survivors.push(projectile),
                ProjectileStep::HitEnemy { enemy } => {
                    if let Some(target) = self
                        .enemies
                        .iter_mut()
                        .find(|candidate| candidate.id() == enemy && !candidate.is_dead())
                    {
                        deal_elemental_damage(
                            target,
                            projectile.damage(),
                            projectile.element(),
                            &self.config,
                            &self.bus,
                        );
                    }
                    self.bus.publish(Event::Combat(CombatEvent::EffectExpired {
                        id: projectile.id(),
                    }));
                }
                ProjectileStep::Blocked | ProjectileStep::Expired => {
                    self.bus.publish(Event::Combat(CombatEvent::EffectExpired {
                        id: projectile.id(),
                    }));
                }
            }
        }

        self.projectiles = survivors;
    }

    fn run_deferred(&mut self) {
        for (owner, action) in self.deferred.drain_due(self.clock) {
            match action {
                DeferredAction::ResolveArea => self.resolve_area(owner),
            }
        }
    }

    fn resolve_area(&mut self, id: EntityId) {
        // The owner may be gone (e.g. a reset between schedule and due);
        // a deferred action without its owner is a no-op.
        let Some(index) = self.areas.iter().position(|area| area.id() == id) else {
            tracing::trace!(%id, "skipping deferred action for missing owner");
            return;
        };
        let area = self.areas.swap_remove(index);

        // Snapshot the qualifying ids first; enemies dying mid-pass must
        // not skip or double-process the others.
        let colliders = self.enemy_colliders();
        for target in area.targets(&colliders, self.config.enemy_hit_radius) {
            if let Some(enemy) = self
                .enemies
                .iter_mut()
                .find(|candidate| candidate.id() == target && !candidate.is_dead())
            {
                deal_elemental_damage(
                    enemy,
                    area.damage(),
                    area.element(),
                    &self.config,
                    &self.bus,
                );
            }
        }

        self.bus
            .publish(Event::Combat(CombatEvent::EffectExpired { id }));
    }

    fn sweep_defeated_enemies(&mut self) {
        let bus = self.bus.clone();
        self.enemies.retain(|enemy| {
            if enemy.is_dead() {
                bus.publish(Event::Combat(CombatEvent::EnemyDefeated {
                    id: enemy.id(),
                    position: enemy.position(),
                }));
                false
            } else {
                true
            }
        });
    }

    fn publish_switch(&mut self, outcome: SwitchOutcome) {
        tracing::debug!(name = %outcome.name, slot = outcome.slot, "active character changed");
        self.bus.publish(Event::Party(PartyEvent::Switched {
            slot: outcome.slot,
            name: outcome.name,
            element: outcome.element,
            color: outcome.color,
        }));
    }

    fn allocate_entity(&mut self) -> EntityId {
        let id = EntityId(self.next_entity);
        self.next_entity += 1;
        id
    }

    fn enemy_colliders(&self) -> Vec<(EntityId, Vec3)> {
        self.enemies
            .iter()
            .filter(|enemy| !enemy.is_dead())
            .map(|enemy| (enemy.id(), enemy.position()))
            .collect()
    }
}
