//! Elemental damage delivery.
//!
//! Every elemental hit on an enemy funnels through
//! [`deal_elemental_damage`]: reaction lookup against the target's applied
//! element, final damage application, and the combat/feedback events the
//! presentation shows. Projectile and area resolution both call in here;
//! nothing else touches [`EnemyAgent::apply_damage`].

use wilds_core::{Color, Element, EnemyAgent, EnemyHitReport, GameConfig, resolve};

use crate::events::{CombatEvent, Event, EventBus, FeedbackEvent};

/// Resolves and applies elemental damage to one enemy, publishing the
/// damage number (and reaction name, if one triggered) for feedback.
pub fn deal_elemental_damage(
    enemy: &mut EnemyAgent,
    base_damage: f32,
    source_element: Element,
    config: &GameConfig,
    bus: &EventBus,
) -> EnemyHitReport {
    let resolution = resolve(base_damage, source_element, enemy.status().applied());
    let report = enemy.apply_damage(
        resolution.damage,
        source_element,
        config.element_status_duration,
    );

    tracing::debug!(
        enemy = %enemy.id(),
        damage = resolution.damage,
        reaction = ?resolution.reaction,
        "elemental hit"
    );

    bus.publish(Event::Combat(CombatEvent::DamageDealt {
        target: enemy.id(),
        amount: resolution.damage,
        reaction: resolution.reaction,
    }));

    let number_color = if resolution.reaction.is_some() {
        Color::ORANGE
    } else {
        Color::WHITE
    };
    bus.publish(Event::Feedback(FeedbackEvent::banner(
        (resolution.damage.round() as i64).to_string(),
        number_color,
    )));
    if let Some(reaction) = resolution.reaction {
        bus.publish(Event::Feedback(
            FeedbackEvent::banner(reaction.to_string(), Color::ORANGE).with_scale(2.5),
        ));
    }

    report
}
