//! Party lifecycle through a session: falls, auto-switching, defeat,
//! waypoint healing, reset.

use tokio::sync::broadcast::Receiver;

use wilds_core::{EnemyTemplate, HeldButtons, InputEvent, Vec3};
use wilds_runtime::{CombatEvent, Event, FrameInput, PartyEvent, Session, Topic};

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

/// Adjacent enemy that one-shots any party member.
fn executioner() -> EnemyTemplate {
    EnemyTemplate {
        attack_damage: 1000.0,
        attack_interval: 2.0,
        ..EnemyTemplate::default()
    }
}

#[test]
fn fallen_active_auto_switches_then_defeat_fires_once() {
    init_logs();
    let mut session = Session::builder()
        .draft(["Amber", "Kaeya"])
        .build()
        .expect("session");
    session.spawn_enemy(&executioner(), Vec3::new(0.0, 0.0, 1.0));
    let mut party = session.subscribe(Topic::Party);

    // First hit fells Amber; control passes to Kaeya in the same tick.
    session.advance(&FrameInput::idle(0.1, Vec3::ZERO));
    let events = drain(&mut party);
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::Party(PartyEvent::MemberFallen { name }) if name == "Amber")));
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::Party(PartyEvent::Switched { name, .. }) if name == "Kaeya")));
    assert_eq!(session.hud().active_name, "Kaeya");
    assert!(!session.hud().defeated);

    // Run until the second attack lands and fells Kaeya.
    for _ in 0..25 {
        session.advance(&FrameInput::idle(0.1, Vec3::ZERO));
    }

    let events = drain(&mut party);
    let defeats = events
        .iter()
        .filter(|event| matches!(event, Event::Party(PartyEvent::Defeated)))
        .count();
    assert_eq!(defeats, 1);

    let hud = session.hud();
    assert!(hud.defeated);
    assert_eq!(hud.movement_speed, 0.0);

    // No further defeat events while the terminal state persists.
    for _ in 0..10 {
        session.advance(&FrameInput::idle(0.1, Vec3::ZERO));
    }
    assert!(drain(&mut party)
        .iter()
        .all(|event| !matches!(event, Event::Party(PartyEvent::Defeated))));
}

#[test]
fn defeated_party_cannot_act() {
    let mut session = Session::builder().draft(["Amber"]).build().expect("session");
    session.spawn_enemy(&executioner(), Vec3::new(0.0, 0.0, 1.0));
    session.advance(&FrameInput::idle(0.1, Vec3::ZERO));
    assert!(session.hud().defeated);

    let mut combat = session.subscribe(Topic::Combat);
    session.advance(
        &FrameInput::idle(1.0, Vec3::ZERO)
            .with_events(vec![InputEvent::Attack, InputEvent::Skill, InputEvent::Burst]),
    );

    // Nothing spawned: every invocation was rejected.
    assert!(drain(&mut combat)
        .iter()
        .all(|event| !matches!(event, Event::Combat(CombatEvent::EffectSpawned { .. }))));
    assert_eq!(session.projectiles().count(), 0);
}

#[test]
fn reset_restores_a_playable_party() {
    let mut session = Session::builder().draft(["Amber"]).build().expect("session");
    session.spawn_enemy(&executioner(), Vec3::new(0.0, 0.0, 1.0));
    session.advance(&FrameInput::idle(0.1, Vec3::ZERO));
    assert!(session.hud().defeated);

    session.reset().expect("reset");

    let hud = session.hud();
    assert!(!hud.defeated);
    assert_eq!(hud.active_name, "Amber");
    assert_eq!(hud.hp, hud.max_hp);
}

#[test]
fn waypoint_interaction_heals_and_revives_the_team() {
    let mut session = Session::builder()
        .draft(["Amber", "Kaeya"])
        .build()
        .expect("session");
    session.add_waypoint(Vec3::ZERO);

    // One lethal hit on Amber, then the attacker leaves the picture.
    session.spawn_enemy(&executioner(), Vec3::new(0.0, 0.0, 1.0));
    session.advance(&FrameInput::idle(0.1, Vec3::ZERO));
    assert!(session
        .party()
        .member("Amber")
        .expect("drafted")
        .is_fallen());

    let mut party = session.subscribe(Topic::Party);
    session.advance(&FrameInput::idle(0.1, Vec3::ZERO).holding(HeldButtons::INTERACT));

    let events = drain(&mut party);
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::Party(PartyEvent::TeamHealed))));
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::Party(PartyEvent::MemberRevived { name }) if name == "Amber")));
    for member in session.party().members() {
        assert_eq!(member.hp(), member.max_hp());
    }

    // Holding interact with a full team does nothing further.
    session.advance(&FrameInput::idle(0.1, Vec3::new(50.0, 0.0, 50.0)));
    let mut party = session.subscribe(Topic::Party);
    session.advance(&FrameInput::idle(0.1, Vec3::ZERO).holding(HeldButtons::INTERACT));
    assert!(drain(&mut party)
        .iter()
        .all(|event| !matches!(event, Event::Party(PartyEvent::TeamHealed))));
}

#[test]
fn falling_out_of_the_world_is_reported_once_per_excursion() {
    let mut session = Session::builder().build().expect("session");
    let mut party = session.subscribe(Topic::Party);

    let below = Vec3::new(0.0, -20.0, 0.0);
    session.advance(&FrameInput::idle(0.1, below));
    session.advance(&FrameInput::idle(0.1, below));

    let notices = drain(&mut party)
        .iter()
        .filter(|event| matches!(event, Event::Party(PartyEvent::PlayerOutOfBounds)))
        .count();
    assert_eq!(notices, 1);

    // Back above ground, then below again: a fresh notice.
    session.advance(&FrameInput::idle(0.1, Vec3::ZERO));
    session.advance(&FrameInput::idle(0.1, below));
    assert_eq!(
        drain(&mut party)
            .iter()
            .filter(|event| matches!(event, Event::Party(PartyEvent::PlayerOutOfBounds)))
            .count(),
        1
    );
}

#[test]
fn deferred_skill_resolution_survives_a_reset() {
    let mut session = Session::builder().draft(["Amber"]).build().expect("session");
    session.spawn_enemy(
        &EnemyTemplate {
            speed: 0.0,
            attack_damage: 0.0,
            attack_interval: 1000.0,
            ..EnemyTemplate::default()
        },
        Vec3::new(0.0, 0.0, 3.0),
    );
    let mut combat = session.subscribe(Topic::Combat);

    // Schedule the skill resolution, then reset before it comes due.
    session.advance(&FrameInput::idle(0.1, Vec3::ZERO).with_events(vec![InputEvent::Skill]));
    session.reset().expect("reset");
    session.advance(&FrameInput::idle(1.0, Vec3::ZERO));

    // The orphaned resolution is skipped: no damage, enemy untouched.
    assert!(drain(&mut combat)
        .iter()
        .all(|event| !matches!(event, Event::Combat(CombatEvent::DamageDealt { .. }))));
    assert!(session.enemies().all(|enemy| enemy.hp() == enemy.max_hp()));
}
