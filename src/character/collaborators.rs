//! Collaborator Interfaces
//!
//! The controller never reaches into a global environment. Everything it needs
//! from the outside is expressed by the traits in this module:
//!
//! - [`AnimationPlayer`]: per-entity clip playback, owned by the controller
//! - [`WorldQuery`]: ground contact, submersion, stances and intent vectors
//! - [`Inventory`]: draw state and wielded item
//! - [`SkillStore`]: skill progress accrual
//!
//! The shared collaborators are lent to the controller once per tick through a
//! [`TickContext`].

use bitflags::bitflags;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::character::state::{DrawState, ItemCategory};

new_key_type! {
    /// Handle to the world entity a controller animates.
    pub struct ActorHandle;
}

bitflags! {
    /// Axes along which clip root motion is accumulated into entity movement.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccumulationAxes: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
        const Z = 1 << 2;
    }
}

impl AccumulationAxes {
    /// Zeroes the components of `v` that are not accumulated.
    #[inline]
    #[must_use]
    pub fn mask(self, v: Vec3) -> Vec3 {
        Vec3::new(
            if self.contains(Self::X) { v.x } else { 0.0 },
            if self.contains(Self::Y) { v.y } else { 0.0 },
            if self.contains(Self::Z) { v.z } else { 0.0 },
        )
    }
}

/// Blending priority of a playback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Default,
    Weapon,
    Hit,
    Death,
}

/// How many additional passes a clip makes after the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repeat {
    Times(usize),
    Forever,
}

impl Repeat {
    #[inline]
    #[must_use]
    pub fn looping(looping: bool) -> Self {
        if looping { Self::Forever } else { Self::Times(0) }
    }
}

/// Per-entity animation clip player.
pub trait AnimationPlayer {
    fn has_clip(&self, name: &str) -> bool;

    /// Starts `name` at marker `start`, running to marker `stop`, replacing the
    /// current playback.
    ///
    /// Returns `true` when the clip itself carries translation, so the caller
    /// must not apply intent-derived displacement on the accumulated axes.
    fn play(
        &mut self,
        name: &str,
        priority: Priority,
        start: &str,
        stop: &str,
        weight: f32,
        repeat: Repeat,
    ) -> bool;

    /// Advances playback and returns the root-motion displacement for the step.
    fn advance(&mut self, dt: f32) -> Vec3;

    /// Sets the movement speed playback should match.
    fn set_speed(&mut self, speed: f32);

    fn set_accumulation(&mut self, axes: AccumulationAxes);

    fn show_carried_implements(&mut self, visible: bool);

    /// Whether a clip is still running (a finite clip has not reached its last stop).
    fn is_playing(&self) -> bool;
}

/// Stance queries answered by [`WorldQuery::stance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stance {
    Run,
    Sneak,
}

/// World and physics queries for a single actor.
pub trait WorldQuery {
    fn is_on_ground(&self, actor: ActorHandle) -> bool;
    fn is_submerged(&self, actor: ActorHandle) -> bool;
    fn stance(&self, actor: ActorHandle, stance: Stance) -> bool;

    /// Movement intent: x lateral, y forward, z jump thrust.
    fn movement_intent(&self, actor: ActorHandle) -> Vec3;

    /// Rotation intent: pitch, roll, yaw (z).
    fn rotation_intent(&self, actor: ActorHandle) -> Vec3;

    fn speed(&self, actor: ActorHandle) -> f32;

    /// Vertical jump speed for the actor.
    fn jump_height(&self, actor: ActorHandle) -> f32;

    /// Whether this actor is the player character.
    fn is_player(&self, actor: ActorHandle) -> bool;
}

/// Equipment lookup.
pub trait Inventory {
    fn draw_state(&self, actor: ActorHandle) -> DrawState;

    /// Item in the weapon hand, if any.
    fn wielded_item(&self, actor: ActorHandle) -> Option<ItemCategory>;
}

/// Skill identifier understood by the stat store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillId(pub u16);

impl SkillId {
    pub const ATHLETICS: SkillId = SkillId(8);
}

/// How a skill was exercised; selects the progress rate in the stat store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillUse {
    Running,
    Submerged,
}

/// Skill progress accrual.
pub trait SkillStore {
    fn record_skill_progress(&mut self, actor: ActorHandle, skill: SkillId, usage: SkillUse);
}

/// Shared collaborators lent to controllers for one tick.
pub struct TickContext<'a> {
    pub world: &'a dyn WorldQuery,
    pub inventory: &'a dyn Inventory,
    pub skills: &'a mut dyn SkillStore,
}

impl<'a> TickContext<'a> {
    pub fn new(
        world: &'a dyn WorldQuery,
        inventory: &'a dyn Inventory,
        skills: &'a mut dyn SkillStore,
    ) -> Self {
        Self {
            world,
            inventory,
            skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_keeps_only_accumulated_axes() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!((AccumulationAxes::X | AccumulationAxes::Y).mask(v), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(AccumulationAxes::empty().mask(v), Vec3::ZERO);
        assert_eq!(AccumulationAxes::all().mask(v), v);
    }

    #[test]
    fn looping_maps_to_repeat() {
        assert_eq!(Repeat::looping(true), Repeat::Forever);
        assert_eq!(Repeat::looping(false), Repeat::Times(0));
    }
}
