//! End-to-end combat resolution through a live session.

use tokio::sync::broadcast::Receiver;

use wilds_core::{Element, EnemyTemplate, HeldButtons, InputEvent, Reaction, Vec3};
use wilds_runtime::{CombatEvent, Event, FrameInput, Session, Topic};

fn drain(receiver: &mut Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

/// Pipe simulation logs through `RUST_LOG` when debugging a failure.
fn init_logs() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn damage_events(events: &[Event]) -> Vec<(f32, Option<Reaction>)> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Combat(CombatEvent::DamageDealt {
                amount, reaction, ..
            }) => Some((*amount, *reaction)),
            _ => None,
        })
        .collect()
}

/// A placid target that never closes in or hits back.
fn training_dummy() -> EnemyTemplate {
    EnemyTemplate {
        speed: 0.0,
        attack_damage: 0.0,
        attack_interval: 1000.0,
        ..EnemyTemplate::default()
    }
}

#[test]
fn basic_attack_hits_and_applies_the_element() {
    init_logs();
    let mut session = Session::builder().draft(["Amber"]).build().expect("session");
    let enemy = session.spawn_enemy(&training_dummy(), Vec3::new(0.0, 0.0, 10.0));
    let mut combat = session.subscribe(Topic::Combat);

    let frame = FrameInput::idle(0.4, Vec3::ZERO).with_events(vec![InputEvent::Attack]);
    session.advance(&frame);

    let events = drain(&mut combat);
    let hits = damage_events(&events);
    assert_eq!(hits, vec![(12.0, None)]);

    let target = session
        .enemies()
        .find(|agent| agent.id() == enemy)
        .expect("enemy alive");
    assert_eq!(target.hp(), 38.0);
    assert_eq!(target.status().applied(), Some(Element::Pyro));
    // Consumed on its first hit.
    assert_eq!(session.projectiles().count(), 0);
}

#[test]
fn cross_element_hit_triggers_melt() {
    let mut session = Session::builder()
        .draft(["Kaeya", "Amber"])
        .build()
        .expect("session");
    session.spawn_enemy(&training_dummy(), Vec3::new(0.0, 0.0, 8.0));
    let mut combat = session.subscribe(Topic::Combat);

    // Cryo application from Kaeya's projectile.
    session.advance(&FrameInput::idle(0.5, Vec3::ZERO).with_events(vec![InputEvent::Attack]));

    // Let the attack and switch cooldowns lapse, then swap to Amber.
    session.advance(&FrameInput::idle(1.5, Vec3::ZERO).with_events(vec![InputEvent::SwitchSlot(1)]));

    // Pyro onto the lingering Cryo status: Melt at 2.0.
    session.advance(&FrameInput::idle(0.5, Vec3::ZERO).with_events(vec![InputEvent::Attack]));

    let hits = damage_events(&drain(&mut combat));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0], (11.0, None));
    assert_eq!(hits[1], (24.0, Some(Reaction::Melt)));
}

#[test]
fn skill_resolves_after_its_delay() {
    let mut session = Session::builder().draft(["Amber"]).build().expect("session");
    let enemy = session.spawn_enemy(&training_dummy(), Vec3::new(0.0, 0.0, 3.0));
    let mut combat = session.subscribe(Topic::Combat);

    session.advance(&FrameInput::idle(0.1, Vec3::ZERO).with_events(vec![InputEvent::Skill]));
    assert!(
        damage_events(&drain(&mut combat)).is_empty(),
        "skill must not resolve before its delay"
    );

    // Cross the 0.5s resolve delay.
    session.advance(&FrameInput::idle(0.5, Vec3::ZERO));

    let hits = damage_events(&drain(&mut combat));
    assert_eq!(hits, vec![(18.0, None)]);
    let target = session
        .enemies()
        .find(|agent| agent.id() == enemy)
        .expect("enemy alive");
    assert_eq!(target.hp(), 32.0);
}

#[test]
fn burst_hits_every_enemy_in_range_in_one_pass() {
    // Lisa's burst deals 60: lethal for 50 hp targets.
    let mut session = Session::builder().draft(["Lisa"]).build().expect("session");
    session.spawn_enemy(&training_dummy(), Vec3::new(3.0, 0.0, 0.0));
    session.spawn_enemy(&training_dummy(), Vec3::new(0.0, 0.0, 5.0));
    session.spawn_enemy(&training_dummy(), Vec3::new(-4.0, 0.0, 2.0));
    // Out of the 10m radius; must survive untouched.
    let far = session.spawn_enemy(&training_dummy(), Vec3::new(0.0, 0.0, 40.0));
    let mut combat = session.subscribe(Topic::Combat);

    session.advance(&FrameInput::idle(0.1, Vec3::ZERO).with_events(vec![InputEvent::Burst]));

    let events = drain(&mut combat);
    let hits = damage_events(&events);
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|&(amount, _)| amount == 60.0));

    let defeated = events
        .iter()
        .filter(|event| matches!(event, Event::Combat(CombatEvent::EnemyDefeated { .. })))
        .count();
    assert_eq!(defeated, 3);

    let survivors: Vec<_> = session.enemies().map(|agent| agent.id()).collect();
    assert_eq!(survivors, vec![far]);
}

#[test]
fn ability_cooldowns_gate_repeat_use() {
    let mut session = Session::builder().draft(["Amber"]).build().expect("session");
    session.spawn_enemy(&training_dummy(), Vec3::new(0.0, 0.0, 10.0));
    let mut combat = session.subscribe(Topic::Combat);

    // Two attack presses inside the 0.5s window: only one projectile.
    session.advance(
        &FrameInput::idle(0.1, Vec3::ZERO).with_events(vec![InputEvent::Attack, InputEvent::Attack]),
    );

    let spawned = drain(&mut combat)
        .iter()
        .filter(|event| matches!(event, Event::Combat(CombatEvent::EffectSpawned { .. })))
        .count();
    assert_eq!(spawned, 1);

    let hud = session.hud();
    assert!(hud.attack_cooldown > 0.0);
    assert_eq!(hud.skill_cooldown, 0.0);
}

#[test]
fn sprint_drains_stamina_through_the_session() {
    let mut session = Session::builder().build().expect("session");

    session.advance(&FrameInput::idle(1.0, Vec3::ZERO).holding(HeldButtons::SPRINT));
    let hud = session.hud();
    assert_eq!(hud.stamina, 80.0);
    assert_eq!(hud.movement_speed, session.config().sprint_speed);

    session.advance(&FrameInput::idle(1.0, Vec3::ZERO));
    assert_eq!(session.hud().stamina, 90.0);
}
