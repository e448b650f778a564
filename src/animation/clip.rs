use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::animation::tracks::{KeyframeCursor, KeyframeTrack};

/// Marker a clip starts from when no explicit `start` key exists.
pub const START_MARKER: &str = "start";
/// Marker a clip stops at when no explicit `stop` key exists.
pub const STOP_MARKER: &str = "stop";
/// Marker repeating playback wraps back to.
pub const LOOP_START_MARKER: &str = "loop start";

/// A named animation group with text-key markers and optional root motion.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    markers: FxHashMap<String, f32>,
    root_motion: Option<KeyframeTrack<Vec3>>,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration: duration.max(0.0),
            markers: FxHashMap::default(),
            root_motion: None,
        }
    }

    /// Adds a named marker at `time` (clamped into the clip).
    #[must_use]
    pub fn with_marker(mut self, name: impl Into<String>, time: f32) -> Self {
        self.markers.insert(name.into(), time.clamp(0.0, self.duration));
        self
    }

    /// Attaches a root translation track. Extends the duration to cover it.
    #[must_use]
    pub fn with_root_motion(mut self, track: KeyframeTrack<Vec3>) -> Self {
        self.duration = self.duration.max(track.end_time());
        self.root_motion = Some(track);
        self
    }

    /// Time of a marker. `start` and `stop` default to the clip bounds.
    #[must_use]
    pub fn marker(&self, name: &str) -> Option<f32> {
        self.markers.get(name).copied().or(match name {
            START_MARKER => Some(0.0),
            STOP_MARKER => Some(self.duration),
            _ => None,
        })
    }

    #[must_use]
    pub fn has_root_motion(&self) -> bool {
        self.root_motion.is_some()
    }

    /// Root position at `time`; zero without root motion.
    pub fn root_position(&self, time: f32, cursor: &mut KeyframeCursor) -> Vec3 {
        self.root_motion
            .as_ref()
            .map_or(Vec3::ZERO, |track| track.sample_with_cursor(time, cursor))
    }

    /// Root displacement between two times.
    #[must_use]
    pub fn translation(&self, from: f32, to: f32) -> Vec3 {
        self.root_motion
            .as_ref()
            .map_or(Vec3::ZERO, |track| track.sample(to) - track.sample(from))
    }
}
