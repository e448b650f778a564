//! Intent Sampling & Locomotion Rules
//!
//! Each tick the driver samples the world once into an [`IntentSample`] and
//! runs it through an ordered list of rules. The first rule that matches picks
//! the locomotion pose; if none matches the entity settles into a resting pose
//! (or drains its one-shot queue).
//!
//! # Rule order
//!
//! 1. [`strafe`]: lateral intent dominates (`|x / 2| > |y|`) and the actor can move
//! 2. [`advance`]: any forward/back intent and the actor can move
//! 3. [`turn`]: yaw intent while neither submerged nor sneaking
//! 4. otherwise [`LocomotionRule::Settle`]

use glam::Vec3;

use crate::character::collaborators::{ActorHandle, Stance, WorldQuery};
use crate::character::state::{Direction, LocomotionState};

/// World state relevant to locomotion, sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntentSample {
    pub on_ground: bool,
    pub submerged: bool,
    pub running: bool,
    pub sneaking: bool,
    /// x lateral, y forward, z jump thrust.
    pub movement: Vec3,
    /// Pitch, roll, yaw.
    pub rotation: Vec3,
    pub speed: f32,
}

impl IntentSample {
    pub fn sample(world: &dyn WorldQuery, actor: ActorHandle) -> Self {
        Self {
            on_ground: world.is_on_ground(actor),
            submerged: world.is_submerged(actor),
            running: world.stance(actor, Stance::Run),
            sneaking: world.stance(actor, Stance::Sneak),
            movement: world.movement_intent(actor),
            rotation: world.rotation_intent(actor),
            speed: world.speed(actor),
        }
    }

    #[inline]
    #[must_use]
    pub fn has_movement_intent(&self) -> bool {
        self.movement.length_squared() > 0.0
    }

    #[inline]
    #[must_use]
    pub fn has_planar_intent(&self) -> bool {
        self.movement.x != 0.0 || self.movement.y != 0.0
    }

    /// Vertical displacement for this tick from jump thrust.
    ///
    /// Thrust applies only from the ground. With planar intent the thrust is
    /// scaled by `lateral_scale`; there is no dedicated jump pose yet, so the
    /// actor keeps its walking/idle pose while rising.
    #[must_use]
    pub fn jump_thrust(&self, jump_height: f32, lateral_scale: f32, dt: f32) -> f32 {
        if !self.on_ground || self.movement.z <= 0.0 {
            return 0.0;
        }
        if self.has_planar_intent() {
            jump_height * lateral_scale * dt
        } else {
            jump_height * dt
        }
    }
}

/// Outcome of the locomotion rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionRule {
    /// Sideways-dominant movement; forward displacement is always manual.
    Strafe(LocomotionState),
    /// Forward/back movement; lateral displacement is always manual.
    Advance(LocomotionState),
    /// Turning in place.
    Turn(LocomotionState),
    /// No motion: rest in the given pose, or play the next queued one-shot.
    Settle(LocomotionState),
}

impl LocomotionRule {
    #[inline]
    #[must_use]
    pub fn state(self) -> LocomotionState {
        match self {
            Self::Strafe(s) | Self::Advance(s) | Self::Turn(s) | Self::Settle(s) => s,
        }
    }
}

pub type Rule = fn(&IntentSample) -> Option<LocomotionRule>;

/// Rules in priority order. The first match wins.
pub const RULES: [Rule; 3] = [strafe, advance, turn];

#[must_use]
pub fn strafe(sample: &IntentSample) -> Option<LocomotionRule> {
    let v = sample.movement;
    if (v.x / 2.0).abs() > v.y.abs() && sample.speed > 0.0 {
        let direction = if v.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        };
        Some(LocomotionRule::Strafe(moving_state(sample, direction)))
    } else {
        None
    }
}

#[must_use]
pub fn advance(sample: &IntentSample) -> Option<LocomotionRule> {
    let v = sample.movement;
    if v.y != 0.0 && sample.speed > 0.0 {
        let direction = if v.y > 0.0 {
            Direction::Forward
        } else {
            Direction::Back
        };
        Some(LocomotionRule::Advance(moving_state(sample, direction)))
    } else {
        None
    }
}

#[must_use]
pub fn turn(sample: &IntentSample) -> Option<LocomotionRule> {
    let yaw = sample.rotation.z;
    if yaw != 0.0 && !sample.submerged && !sample.sneaking {
        let state = if yaw > 0.0 {
            LocomotionState::TurnRight
        } else {
            LocomotionState::TurnLeft
        };
        Some(LocomotionRule::Turn(state))
    } else {
        None
    }
}

/// Runs the rule list over a sample.
#[must_use]
pub fn select_locomotion(sample: &IntentSample) -> LocomotionRule {
    RULES.iter().find_map(|rule| rule(sample)).unwrap_or_else(|| {
        LocomotionRule::Settle(LocomotionState::resting(sample.submerged, sample.sneaking))
    })
}

fn moving_state(sample: &IntentSample, direction: Direction) -> LocomotionState {
    LocomotionState::moving(direction, sample.submerged, sample.sneaking, sample.running)
}
