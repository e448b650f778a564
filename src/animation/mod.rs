//! Reference Clip Player
//!
//! A small in-memory implementation of
//! [`AnimationPlayer`](crate::character::AnimationPlayer): keyframed root
//! motion, named markers, repeat counts and speed-matched playback. It does
//! not pose skeletons; it only tracks time and root translation.

mod values;
pub mod tracks;
pub mod clip;
pub mod action;
pub mod mixer;

pub use values::Interpolatable;
pub use clip::{AnimationClip, LOOP_START_MARKER, START_MARKER, STOP_MARKER};
pub use action::AnimationAction;
pub use mixer::AnimationMixer;
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
