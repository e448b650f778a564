use std::ops::AddAssign;

use glam::Vec3;

/// Displacement and rotation produced by one controller tick.
///
/// Position is in actor-local space: x lateral, y forward, z vertical.
/// Rotation components are pitch, roll and yaw deltas in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Movement {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Movement {
    pub const ZERO: Movement = Movement {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.position == Vec3::ZERO && self.rotation == Vec3::ZERO
    }
}

impl AddAssign for Movement {
    fn add_assign(&mut self, rhs: Movement) {
        self.position += rhs.position;
        self.rotation += rhs.rotation;
    }
}
