use std::sync::Arc;

use glam::Vec3;

use crate::animation::clip::AnimationClip;
use crate::animation::tracks::KeyframeCursor;
use crate::character::{Priority, Repeat};

/// One playback of a clip segment, from a start marker to a stop marker.
///
/// On reaching `stop` the action either wraps to `loop_start` (while repeats
/// remain) or finishes and holds the final pose.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub priority: Priority,
    pub weight: f32,
    pub time: f32,
    /// Playback rate multiplier.
    pub time_scale: f32,

    loop_start: f32,
    stop: f32,
    repeat: Repeat,
    finished: bool,

    cursor: KeyframeCursor,
    last_root: Vec3,
}

impl AnimationAction {
    #[must_use]
    pub fn new(
        clip: Arc<AnimationClip>,
        priority: Priority,
        start: f32,
        loop_start: f32,
        stop: f32,
        weight: f32,
        repeat: Repeat,
    ) -> Self {
        let mut cursor = KeyframeCursor::default();
        let last_root = clip.root_position(start, &mut cursor);
        Self {
            clip,
            priority,
            weight,
            time: start,
            time_scale: 1.0,
            loop_start: loop_start.min(stop),
            stop,
            repeat,
            finished: false,
            cursor,
            last_root,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Average root speed over one pass of the looping segment.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        let span = self.stop - self.loop_start;
        if span <= f32::EPSILON {
            return 0.0;
        }
        self.clip.translation(self.loop_start, self.stop).length() / span
    }

    /// Advances time and returns the root displacement covered, across wraps.
    pub fn update(&mut self, dt: f32) -> Vec3 {
        if self.finished || dt <= 0.0 {
            return Vec3::ZERO;
        }

        let mut remaining = dt * self.time_scale;
        let mut moved = Vec3::ZERO;

        loop {
            let target = self.time + remaining;
            if target < self.stop {
                moved += self.move_root_to(target);
                self.time = target;
                break;
            }

            moved += self.move_root_to(self.stop);
            remaining = target - self.stop;
            self.time = self.stop;

            match self.repeat {
                Repeat::Times(0) => {
                    self.finished = true;
                    break;
                }
                Repeat::Times(n) => self.repeat = Repeat::Times(n - 1),
                Repeat::Forever => {}
            }

            if self.stop - self.loop_start <= f32::EPSILON {
                // Zero-length segment: nothing to wrap through.
                if matches!(self.repeat, Repeat::Times(0)) {
                    self.finished = true;
                }
                break;
            }

            self.time = self.loop_start;
            self.last_root = self.clip.root_position(self.loop_start, &mut self.cursor);
        }

        moved
    }

    fn move_root_to(&mut self, time: f32) -> Vec3 {
        let root = self.clip.root_position(time, &mut self.cursor);
        let delta = root - self.last_root;
        self.last_root = root;
        delta
    }
}
