use std::sync::Arc;

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::animation::action::AnimationAction;
use crate::animation::clip::{AnimationClip, LOOP_START_MARKER};
use crate::character::{AccumulationAxes, AnimationPlayer, Priority, Repeat};

/// In-memory clip player for one entity.
///
/// Holds a library of named clips and at most one active action. Root motion
/// is reported only along the accumulated axes.
pub struct AnimationMixer {
    clips: FxHashMap<String, Arc<AnimationClip>>,
    active: Option<AnimationAction>,
    accumulation: AccumulationAxes,
    implements_visible: bool,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clips: FxHashMap::default(),
            active: None,
            accumulation: AccumulationAxes::all(),
            implements_visible: false,
        }
    }

    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.clips.insert(clip.name.clone(), Arc::new(clip));
    }

    #[must_use]
    pub fn with_clip(mut self, clip: AnimationClip) -> Self {
        self.add_clip(clip);
        self
    }

    #[must_use]
    pub fn active(&self) -> Option<&AnimationAction> {
        self.active.as_ref()
    }

    /// Name of the clip currently playing.
    #[must_use]
    pub fn current_clip(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.clip().name.as_str())
    }

    #[must_use]
    pub fn accumulation(&self) -> AccumulationAxes {
        self.accumulation
    }

    #[must_use]
    pub fn implements_visible(&self) -> bool {
        self.implements_visible
    }
}

impl Default for AnimationMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer for AnimationMixer {
    fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    fn play(
        &mut self,
        name: &str,
        priority: Priority,
        start: &str,
        stop: &str,
        weight: f32,
        repeat: Repeat,
    ) -> bool {
        // A rejected request stops the previous clip; its root motion no longer applies.
        let Some(clip) = self.clips.get(name) else {
            log::warn!("Animation {name} not found");
            self.active = None;
            return false;
        };

        let (Some(start_time), Some(stop_time)) = (clip.marker(start), clip.marker(stop)) else {
            log::warn!("Animation {name} is missing marker '{start}' or '{stop}'");
            self.active = None;
            return false;
        };
        if stop_time < start_time {
            log::warn!("Animation {name}: '{stop}' precedes '{start}'");
            self.active = None;
            return false;
        }

        let loop_start = clip
            .marker(LOOP_START_MARKER)
            .filter(|&t| t >= start_time && t <= stop_time)
            .unwrap_or(start_time);

        let moves = self
            .accumulation
            .mask(clip.translation(start_time, stop_time))
            .length_squared()
            > 0.0;

        self.active = Some(AnimationAction::new(
            Arc::clone(clip),
            priority,
            start_time,
            loop_start,
            stop_time,
            weight,
            repeat,
        ));
        moves
    }

    fn advance(&mut self, dt: f32) -> Vec3 {
        match self.active.as_mut() {
            Some(action) => self.accumulation.mask(action.update(dt)),
            None => Vec3::ZERO,
        }
    }

    fn set_speed(&mut self, speed: f32) {
        let Some(action) = self.active.as_mut() else {
            return;
        };
        // Match the clip's stride to the actor's speed; stationary clips play at rate 1.
        let velocity = action.velocity();
        action.time_scale = if velocity > 1.0 && speed > 0.0 {
            speed / velocity
        } else {
            1.0
        };
    }

    fn set_accumulation(&mut self, axes: AccumulationAxes) {
        self.accumulation = axes;
    }

    fn show_carried_implements(&mut self, visible: bool) {
        self.implements_visible = visible;
    }

    fn is_playing(&self) -> bool {
        self.active.as_ref().is_some_and(|a| !a.is_finished())
    }
}
