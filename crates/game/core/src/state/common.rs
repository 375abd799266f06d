use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Unique identifier for any entity tracked by the runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the player-controlled character.
    pub const PLAYER: Self = Self(0);

    /// Returns true if this entity represents the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// World-space position or direction in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Horizontal distance, ignoring the vertical axis. Pursuit and attack
    /// range checks use this metric so flying or elevated positions don't
    /// distort them.
    pub fn distance_xz(self, other: Self) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Unit-length copy of this vector, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Self> {
        let length = self.length();
        (length > f32::EPSILON).then(|| self * (1.0 / length))
    }

    /// Unit vector pointing at `target`, or `None` when the two positions
    /// coincide.
    pub fn direction_to(self, target: Self) -> Option<Self> {
        let delta = target - self;
        let length = delta.length();
        (length > f32::EPSILON).then(|| delta * (1.0 / length))
    }

    /// Unit vector toward `target` projected onto the ground plane, or
    /// `None` when the horizontal positions coincide.
    pub fn direction_xz_to(self, target: Self) -> Option<Self> {
        let flat = Self::new(target.x - self.x, 0.0, target.z - self.z);
        let length = flat.length();
        (length > f32::EPSILON).then(|| flat * (1.0 / length))
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// sRGB color attached to characters and feedback messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(229, 57, 53);
    pub const GREEN: Self = Self::rgb(67, 160, 71);
    pub const ORANGE: Self = Self::rgb(251, 140, 0);
    pub const CYAN: Self = Self::rgb(0, 188, 212);
    pub const YELLOW: Self = Self::rgb(253, 216, 53);
    pub const AZURE: Self = Self::rgb(30, 136, 229);
    pub const VIOLET: Self = Self::rgb(142, 36, 170);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
