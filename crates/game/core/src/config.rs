/// Game configuration constants and tunable balance parameters.
///
/// Compile-time bounds live as associated constants (used as type
/// parameters for bounded collections); everything a designer might tune
/// is a field with a default, so content files can override it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    // ===== party =====
    /// Stamina pool shared by the whole party.
    pub max_stamina: f32,
    /// Stamina drained per second while sprinting.
    pub stamina_drain_rate: f32,
    /// Stamina restored per second while not sprinting.
    pub stamina_regen_rate: f32,
    /// Ground speed while walking.
    pub walk_speed: f32,
    /// Ground speed while sprinting with stamina available.
    pub sprint_speed: f32,
    /// Fixed cooldown applied after every basic attack.
    pub attack_cooldown: f32,
    /// Cooldown applied after a successful character switch.
    pub switch_cooldown: f32,

    // ===== ability damage =====
    /// Skill damage as a multiple of the active character's attack stat.
    pub skill_damage_multiplier: f32,
    /// Burst damage as a multiple of the active character's attack stat.
    pub burst_damage_multiplier: f32,

    // ===== effect geometry =====
    /// Projectile travel speed.
    pub projectile_speed: f32,
    /// Seconds before an unconsumed projectile despawns.
    pub projectile_lifetime: f32,
    /// Distance ahead of the aim origin where projectiles spawn.
    pub projectile_spawn_offset: f32,
    /// Distance ahead of the player where the skill volume is centered.
    pub skill_forward_offset: f32,
    /// Radius of the skill volume once fully expanded.
    pub skill_radius: f32,
    /// Delay between skill invocation and hit resolution.
    pub skill_resolve_delay: f32,
    /// Radius of the burst volume around the player.
    pub burst_radius: f32,

    // ===== status =====
    /// Seconds an applied element lingers on an enemy.
    pub element_status_duration: f32,

    // ===== collision =====
    /// Collider radius used for enemy hit tests.
    pub enemy_hit_radius: f32,

    // ===== world interaction =====
    /// Distance within which a waypoint can be interacted with.
    pub waypoint_radius: f32,
    /// Height below which the player counts as out of bounds.
    pub out_of_bounds_y: f32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of party members.
    pub const MAX_PARTY_SIZE: usize = 4;

    pub fn new() -> Self {
        Self {
            max_stamina: 100.0,
            stamina_drain_rate: 20.0,
            stamina_regen_rate: 10.0,
            walk_speed: 8.0,
            sprint_speed: 15.0,
            attack_cooldown: 0.5,
            switch_cooldown: 1.0,
            skill_damage_multiplier: 1.5,
            burst_damage_multiplier: 4.0,
            projectile_speed: 25.0,
            projectile_lifetime: 5.0,
            projectile_spawn_offset: 1.5,
            skill_forward_offset: 3.0,
            skill_radius: 2.5,
            skill_resolve_delay: 0.5,
            burst_radius: 10.0,
            element_status_duration: 5.0,
            enemy_hit_radius: 1.0,
            waypoint_radius: 3.0,
            out_of_bounds_y: -10.0,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
