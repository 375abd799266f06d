//! Scenario seeding for headless or freshly started sessions.
//!
//! Scatters enemies and waypoints across the field the way a level script
//! would. Seeded so runs are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wilds_core::{EnemyOracle, OracleError, Vec3};

use crate::error::RuntimeError;
use crate::session::Session;

/// Spawn plan for one session.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub enemy_kind: String,
    pub enemy_count: usize,
    pub waypoint_count: usize,
    /// Spawns scatter uniformly in `[-extent, extent]` on both ground
    /// axes.
    pub spawn_extent: f32,
    pub seed: u64,
}

impl Scenario {
    /// The default open-field encounter.
    pub fn field_patrol(seed: u64) -> Self {
        Self {
            enemy_kind: "slime".to_owned(),
            enemy_count: 15,
            waypoint_count: 5,
            spawn_extent: 50.0,
            seed,
        }
    }

    /// Populates `session` with this scenario's spawns. Fails fast if the
    /// enemy kind is missing from the catalog.
    pub fn seed_session(
        &self,
        session: &mut Session,
        enemies: &dyn EnemyOracle,
    ) -> Result<(), RuntimeError> {
        let template =
            enemies
                .template(&self.enemy_kind)
                .ok_or_else(|| OracleError::UnknownEnemyKind {
                    kind: self.enemy_kind.clone(),
                })?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        for _ in 0..self.enemy_count {
            let position = self.scatter(&mut rng, 5.0);
            session.spawn_enemy(&template, position);
        }
        for _ in 0..self.waypoint_count {
            let position = self.scatter(&mut rng, 0.0);
            session.add_waypoint(position);
        }

        tracing::info!(
            enemies = self.enemy_count,
            waypoints = self.waypoint_count,
            "scenario seeded"
        );
        Ok(())
    }

    fn scatter(&self, rng: &mut StdRng, height: f32) -> Vec3 {
        Vec3::new(
            rng.gen_range(-self.spawn_extent..=self.spawn_extent),
            height,
            rng.gen_range(-self.spawn_extent..=self.spawn_extent),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wilds_content::EnemyCatalog;

    #[test]
    fn seeding_is_reproducible() {
        let catalog = EnemyCatalog::builtin();
        let scenario = Scenario::field_patrol(42);

        let mut first = Session::builder().build().expect("session");
        let mut second = Session::builder().build().expect("session");
        scenario.seed_session(&mut first, &catalog).expect("seed");
        scenario.seed_session(&mut second, &catalog).expect("seed");

        let positions = |session: &Session| {
            session
                .enemies()
                .map(|enemy| enemy.position())
                .collect::<Vec<_>>()
        };
        assert_eq!(positions(&first), positions(&second));
        assert_eq!(first.enemies().count(), 15);
        assert_eq!(first.waypoints().len(), 5);
    }

    #[test]
    fn unknown_enemy_kind_fails_fast() {
        let catalog = EnemyCatalog::builtin();
        let mut scenario = Scenario::field_patrol(1);
        scenario.enemy_kind = "abyss_herald".to_owned();

        let mut session = Session::builder().build().expect("session");
        assert!(scenario.seed_session(&mut session, &catalog).is_err());
    }
}
