//! Live ability effects: projectiles and area queries.
//!
//! These carry the damage payload of an invoked ability through the world.
//! A projectile is a traveling point query consumed by its first
//! qualifying hit; an area effect is a stationary volume query resolved in
//! one pass. Neither applies damage itself; the session forwards hits to
//! damage resolution.

use wilds_core::{Element, EntityId, Vec3};

use crate::spatial::{SpatialOracle, sphere_raycast};

/// Outcome of advancing a projectile by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectileStep {
    /// Still in flight.
    Flying,
    /// First qualifying hit; the projectile is consumed.
    HitEnemy { enemy: EntityId },
    /// Stopped by static geometry; consumed without damage.
    Blocked,
    /// Lifetime elapsed without a hit.
    Expired,
}

/// A traveling point query fired along the aim direction.
#[derive(Clone, Debug)]
pub struct Projectile {
    id: EntityId,
    position: Vec3,
    /// Unit travel direction, fixed at spawn.
    direction: Vec3,
    speed: f32,
    lifetime: f32,
    age: f32,
    damage: f32,
    element: Element,
}

impl Projectile {
    pub fn spawn(
        id: EntityId,
        position: Vec3,
        direction: Vec3,
        speed: f32,
        lifetime: f32,
        damage: f32,
        element: Element,
    ) -> Self {
        Self {
            id,
            position,
            direction,
            speed,
            lifetime,
            age: 0.0,
            damage,
            element,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn damage(&self) -> f32 {
        self.damage
    }

    pub fn element(&self) -> Element {
        self.element
    }

    /// Moves the projectile by one tick, checking the travelled segment
    /// for the nearest obstruction: enemy colliders first-class, static
    /// geometry through the oracle. The nearest of the two wins.
    pub fn advance(
        &mut self,
        dt: f32,
        enemy_colliders: &[(EntityId, Vec3)],
        hit_radius: f32,
        statics: Option<&dyn SpatialOracle>,
    ) -> ProjectileStep {
        self.age += dt;
        let travel = self.speed * dt;

        let enemy_hit = enemy_colliders
            .iter()
            .filter_map(|&(id, center)| {
                sphere_raycast(self.position, self.direction, travel, center, hit_radius)
                    .map(|distance| (distance, id))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0));

        let static_hit =
            statics.and_then(|oracle| oracle.raycast(self.position, self.direction, travel));

        match (enemy_hit, static_hit) {
            (Some((enemy_distance, enemy)), static_hit)
                if static_hit.is_none_or(|hit| enemy_distance <= hit.distance) =>
            {
                ProjectileStep::HitEnemy { enemy }
            }
            (_, Some(_)) => ProjectileStep::Blocked,
            _ => {
                self.position += self.direction * travel;
                if self.age >= self.lifetime {
                    ProjectileStep::Expired
                } else {
                    ProjectileStep::Flying
                }
            }
        }
    }
}

/// A stationary volume query resolved in a single pass.
#[derive(Clone, Copy, Debug)]
pub struct AreaEffect {
    id: EntityId,
    center: Vec3,
    radius: f32,
    damage: f32,
    element: Element,
}

impl AreaEffect {
    pub fn new(id: EntityId, center: Vec3, radius: f32, damage: f32, element: Element) -> Self {
        Self {
            id,
            center,
            radius,
            damage,
            element,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn damage(&self) -> f32 {
        self.damage
    }

    pub fn element(&self) -> Element {
        self.element
    }

    /// Every enemy whose collider intersects the volume. The ids are
    /// collected up front so the caller can mutate the enemy set while
    /// applying hits without skipping or double-processing anyone.
    pub fn targets(&self, enemy_colliders: &[(EntityId, Vec3)], hit_radius: f32) -> Vec<EntityId> {
        enemy_colliders
            .iter()
            .filter(|(_, center)| self.center.distance(*center) <= self.radius + hit_radius)
            .map(|&(id, _)| id)
            .collect()
    }
}
