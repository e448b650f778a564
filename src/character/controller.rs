//! Character Controller
//!
//! Per-entity animation state machine. Two independent state variables,
//! [`LocomotionState`] and [`EquipmentState`], are each changed through their
//! own transition function; any effective change re-resolves the animation
//! group and restarts playback.
//!
//! # Per-tick flow
//!
//! ```text
//! update(dt)
//!   ├─ sample intent (WorldQuery)
//!   ├─ athletics accrual (player only)
//!   ├─ equipment derivation (bipeds only)
//!   ├─ jump thrust
//!   ├─ locomotion rules ──► transition_locomotion ──► forced_refresh
//!   ├─ rotation integration
//!   └─ advance clip, add root motion   (also while dead)
//! ```
//!
//! Everything except the final step is skipped once a death pose is active.

use std::sync::Arc;

use crate::character::collaborators::{
    AccumulationAxes, ActorHandle, AnimationPlayer, Repeat, SkillId, SkillStore, SkillUse,
    TickContext,
};
use crate::character::groups::AnimationGroupTable;
use crate::character::intent::{IntentSample, LocomotionRule, select_locomotion};
use crate::character::movement::Movement;
use crate::character::queue::{OneShotQueue, PlayMode};
use crate::character::state::{ActorKind, DrawState, EquipmentState, LocomotionState};
use crate::errors::Result;
use crate::settings::ControllerSettings;

/// Builder for [`CharacterController`].
pub struct CharacterControllerBuilder<A: AnimationPlayer> {
    actor: ActorHandle,
    kind: ActorKind,
    animation: Option<A>,
    state: LocomotionState,
    looping: bool,
    settings: Option<Arc<ControllerSettings>>,
    table: Option<Arc<AnimationGroupTable>>,
}

impl<A: AnimationPlayer> CharacterControllerBuilder<A> {
    /// Attaches the clip player. Without one the controller only tracks state.
    #[must_use]
    pub fn animation(mut self, animation: A) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Initial locomotion state (default: looping [`LocomotionState::Idle`]).
    #[must_use]
    pub fn state(mut self, state: LocomotionState, looping: bool) -> Self {
        self.state = state;
        self.looping = looping;
        self
    }

    #[must_use]
    pub fn settings(mut self, settings: Arc<ControllerSettings>) -> Self {
        self.settings = Some(settings);
        self
    }

    #[must_use]
    pub fn table(mut self, table: Arc<AnimationGroupTable>) -> Self {
        self.table = Some(table);
        self
    }

    /// Validates the group table and starts the initial animation.
    pub fn build(self) -> Result<CharacterController<A>> {
        let table = self.table.unwrap_or_else(AnimationGroupTable::standard);
        table.validate()?;

        let mut controller = CharacterController {
            actor: self.actor,
            kind: self.kind,
            animation: self.animation,
            table,
            settings: self.settings.unwrap_or_default(),
            locomotion: self.state,
            equipment: EquipmentState::None,
            moving_animation: false,
            looping: self.looping,
            seconds_running: 0.0,
            seconds_swimming: 0.0,
            skip_next_advance: false,
            queue: OneShotQueue::new(),
        };

        if let Some(animation) = controller.animation.as_mut() {
            // Vertical root motion (knockdown, death) must not push actors into the ground.
            let axes = if controller.kind.is_actor() {
                AccumulationAxes::X | AccumulationAxes::Y
            } else {
                AccumulationAxes::empty()
            };
            animation.set_accumulation(axes);
        }
        controller.play_current()?;

        Ok(controller)
    }
}

/// Drives the animation of a single entity.
pub struct CharacterController<A: AnimationPlayer> {
    actor: ActorHandle,
    kind: ActorKind,
    animation: Option<A>,
    table: Arc<AnimationGroupTable>,
    settings: Arc<ControllerSettings>,

    locomotion: LocomotionState,
    equipment: EquipmentState,
    /// The playing clip translates the entity on its own.
    moving_animation: bool,
    looping: bool,

    seconds_running: f32,
    seconds_swimming: f32,

    skip_next_advance: bool,
    queue: OneShotQueue,
}

impl<A: AnimationPlayer> CharacterController<A> {
    #[must_use]
    pub fn builder(actor: ActorHandle, kind: ActorKind) -> CharacterControllerBuilder<A> {
        CharacterControllerBuilder {
            actor,
            kind,
            animation: None,
            state: LocomotionState::Idle,
            looping: true,
            settings: None,
            table: None,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub fn actor(&self) -> ActorHandle {
        self.actor
    }

    #[must_use]
    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    #[must_use]
    pub fn locomotion(&self) -> LocomotionState {
        self.locomotion
    }

    #[must_use]
    pub fn equipment(&self) -> EquipmentState {
        self.equipment
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.locomotion.is_death()
    }

    #[must_use]
    pub fn is_moving_animation(&self) -> bool {
        self.moving_animation
    }

    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    #[must_use]
    pub fn queued(&self) -> &OneShotQueue {
        &self.queue
    }

    #[must_use]
    pub fn animation(&self) -> Option<&A> {
        self.animation.as_ref()
    }

    pub fn animation_mut(&mut self) -> Option<&mut A> {
        self.animation.as_mut()
    }

    #[must_use]
    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Group the current state pair resolves to, if the player has one.
    pub fn current_group(&self) -> Result<Option<String>> {
        match self.animation.as_ref() {
            Some(animation) => self.table.resolve(self.locomotion, self.equipment, animation),
            None => Ok(None),
        }
    }

    // ========================================================================
    // State machine
    // ========================================================================

    /// Rebinds the controlled entity (e.g. after a cell change). Animation state is kept.
    pub fn update_reference(&mut self, actor: ActorHandle) {
        self.actor = actor;
    }

    /// Switches locomotion state and replays.
    ///
    /// No-op when `state` is already active or the controller is dead.
    pub fn transition_locomotion(&mut self, state: LocomotionState, looping: bool) -> Result<()> {
        if self.locomotion == state || self.locomotion.is_death() {
            return Ok(());
        }
        log::debug!("{:?}: locomotion {:?} -> {state:?}", self.actor, self.locomotion);

        self.locomotion = state;
        self.looping = looping;
        self.forced_refresh()
    }

    /// Switches equipment state and replays.
    ///
    /// No-op when unchanged or the controller is dead.
    pub fn transition_equipment(&mut self, state: EquipmentState) -> Result<()> {
        if self.equipment == state || self.locomotion.is_death() {
            return Ok(());
        }
        log::debug!("{:?}: equipment {:?} -> {state:?}", self.actor, self.equipment);

        self.equipment = state;
        self.forced_refresh()
    }

    /// Drops queued one-shots and restarts the group for the current state pair.
    pub fn forced_refresh(&mut self) -> Result<()> {
        if self.animation.is_none() {
            return Ok(());
        }
        self.queue.clear();
        self.play_current()?;

        let visible = self.equipment.shows_implements();
        if let Some(animation) = self.animation.as_mut() {
            animation.show_carried_implements(visible);
        }
        Ok(())
    }

    fn play_current(&mut self) -> Result<()> {
        let Some(animation) = self.animation.as_mut() else {
            return Ok(());
        };

        match self.table.resolve(self.locomotion, self.equipment, &*animation)? {
            Some(group) => {
                let settings = &self.settings;
                self.moving_animation = animation.play(
                    &group,
                    settings.priority,
                    &settings.start_marker,
                    &settings.stop_marker,
                    settings.refresh_weight,
                    Repeat::looping(self.looping),
                );
                log::trace!("{:?}: playing '{group}' (moving: {})", self.actor, self.moving_animation);
            }
            None => {
                log::warn!(
                    "{:?}: no animation group for {:?}/{:?}",
                    self.actor,
                    self.locomotion,
                    self.equipment
                );
                self.moving_animation = false;
            }
        }
        Ok(())
    }

    // ========================================================================
    // External playback
    // ========================================================================

    /// Plays `group` as a scripted one-shot, `count` times in total.
    ///
    /// [`PlayMode::Queue`] appends behind a one-shot that is already running;
    /// every other case interrupts the current state immediately.
    /// Returns `false` when the group is unavailable.
    pub fn play_group(&mut self, group: &str, mode: PlayMode, count: usize) -> bool {
        if self.locomotion.is_death() {
            log::debug!("{:?}: ignoring '{group}' while dead", self.actor);
            return false;
        }
        let Some(animation) = self.animation.as_mut().filter(|a| a.has_clip(group)) else {
            log::warn!("Animation {group} not found");
            return false;
        };

        let count = count.max(1);
        if mode != PlayMode::Queue || self.locomotion != LocomotionState::SpecialIdle {
            self.queue.clear();
            self.locomotion = LocomotionState::SpecialIdle;
            self.looping = false;

            let settings = &self.settings;
            let start = if mode == PlayMode::ImmediateLoop {
                &settings.loop_marker
            } else {
                &settings.start_marker
            };
            self.moving_animation = animation.play(
                group,
                settings.priority,
                start,
                &settings.stop_marker,
                settings.one_shot_weight,
                Repeat::Times(count - 1),
            );
            log::debug!("{:?}: one-shot '{group}' x{count}", self.actor);
        } else {
            self.queue.push(group, count - 1);
            log::debug!("{:?}: queued '{group}' x{count} ({} pending)", self.actor, self.queue.len());
        }
        true
    }

    /// Leaves playback and root motion untouched on the next update.
    pub fn skip_animation(&mut self) {
        self.skip_next_advance = true;
    }

    // ========================================================================
    // Per-frame driver
    // ========================================================================

    /// Advances the controller by `dt` seconds and returns the resulting movement.
    pub fn update(&mut self, dt: f32, ctx: &mut TickContext<'_>) -> Result<Movement> {
        let mut movement = Movement::ZERO;
        let mut speed = 0.0;

        if !self.locomotion.is_death() {
            let sample = IntentSample::sample(ctx.world, self.actor);
            speed = sample.speed;

            if sample.has_movement_intent() && ctx.world.is_player(self.actor) {
                self.accrue_athletics(&sample, dt, ctx.skills);
            }

            if self.kind == ActorKind::Biped {
                let draw = ctx.inventory.draw_state(self.actor);
                let wielded = match draw {
                    DrawState::Weapon => ctx.inventory.wielded_item(self.actor),
                    DrawState::Nothing | DrawState::Spell => None,
                };
                self.transition_equipment(EquipmentState::derive(draw, wielded))?;
            }

            movement.position.z += sample.jump_thrust(
                ctx.world.jump_height(self.actor),
                self.settings.jump_lateral_scale,
                dt,
            );

            self.apply_locomotion(&sample, dt, &mut movement)?;

            movement.rotation += sample.rotation * dt;
        }

        if self.skip_next_advance {
            log::trace!("{:?}: skipping animation advance", self.actor);
        } else if let Some(animation) = self.animation.as_mut() {
            animation.set_speed(speed);
            movement.position += animation.advance(dt);
        }
        self.skip_next_advance = false;

        Ok(movement)
    }

    fn accrue_athletics(&mut self, sample: &IntentSample, dt: f32, skills: &mut dyn SkillStore) {
        let (seconds, usage) = if sample.submerged {
            (&mut self.seconds_swimming, SkillUse::Submerged)
        } else if sample.running {
            (&mut self.seconds_running, SkillUse::Running)
        } else {
            return;
        };

        *seconds += dt;
        while *seconds >= 1.0 {
            skills.record_skill_progress(self.actor, SkillId::ATHLETICS, usage);
            *seconds -= 1.0;
        }
    }

    fn apply_locomotion(
        &mut self,
        sample: &IntentSample,
        dt: f32,
        movement: &mut Movement,
    ) -> Result<()> {
        let step = sample.speed * dt;

        match select_locomotion(sample) {
            LocomotionRule::Strafe(state) => {
                self.transition_locomotion(state, true)?;
                if !self.moving_animation {
                    movement.position.x += sample.movement.x * step;
                }
                // Sideways clips never carry forward motion.
                movement.position.y += sample.movement.y * step;
            }
            LocomotionRule::Advance(state) => {
                self.transition_locomotion(state, true)?;
                movement.position.x += sample.movement.x * step;
                if !self.moving_animation {
                    movement.position.y += sample.movement.y * step;
                }
            }
            LocomotionRule::Turn(state) => {
                self.transition_locomotion(state, true)?;
            }
            LocomotionRule::Settle(resting) => {
                self.settle(resting)?;
            }
        }
        Ok(())
    }

    /// Rests, or plays the next queued one-shot once the current one has finished.
    fn settle(&mut self, resting: LocomotionState) -> Result<()> {
        if self.locomotion == LocomotionState::SpecialIdle
            && self.animation.as_ref().is_some_and(AnimationPlayer::is_playing)
        {
            return Ok(());
        }

        let Some(next) = self.queue.pop() else {
            return self.transition_locomotion(resting, true);
        };

        if let Some(animation) = self.animation.as_mut() {
            let settings = &self.settings;
            self.moving_animation = animation.play(
                &next.group,
                settings.priority,
                &settings.start_marker,
                &settings.stop_marker,
                settings.one_shot_weight,
                Repeat::Times(next.repeats),
            );
            log::debug!("{:?}: dequeued one-shot '{}'", self.actor, next.group);
        }
        Ok(())
    }
}
