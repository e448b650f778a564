//! Controller Settings
//!
//! Tunables shared by every [`CharacterController`](crate::character::CharacterController):
//! marker names used when starting clips, blend weights, and the jump thrust
//! approximation.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use stride::settings::ControllerSettings;
//!
//! // Defaults match the stock animation set
//! let settings = ControllerSettings::default();
//!
//! // Or load overrides; omitted fields keep their defaults
//! let settings = ControllerSettings::from_json_str(r#"{ "jump_lateral_scale": 0.5 }"#)?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::character::Priority;
use crate::errors::Result;

/// Tunables for character controllers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Marker where locomotion and one-shot playback begins.
    pub start_marker: String,
    /// Marker where playback ends (or wraps, when repeating).
    pub stop_marker: String,
    /// Marker used by [`PlayMode::ImmediateLoop`](crate::character::PlayMode::ImmediateLoop).
    pub loop_marker: String,

    /// Blend weight for state-driven playback.
    pub refresh_weight: f32,
    /// Blend weight for one-shot playback.
    pub one_shot_weight: f32,

    /// Fraction of jump thrust applied while also moving on the plane.
    pub jump_lateral_scale: f32,

    pub priority: Priority,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            start_marker: "start".to_owned(),
            stop_marker: "stop".to_owned(),
            loop_marker: "loop start".to_owned(),
            refresh_weight: 1.0,
            one_shot_weight: 0.0,
            jump_lateral_scale: 0.707,
            priority: Priority::Default,
        }
    }
}

impl ControllerSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loading controller settings from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StrideError;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = ControllerSettings::from_json_str(r#"{ "jump_lateral_scale": 0.5 }"#).unwrap();
        assert!((settings.jump_lateral_scale - 0.5).abs() < f32::EPSILON);
        assert_eq!(settings.start_marker, "start");
        assert_eq!(settings.loop_marker, "loop start");
        assert_eq!(settings.priority, Priority::Default);
    }

    #[test]
    fn malformed_json_is_a_settings_error() {
        let err = ControllerSettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, StrideError::Settings(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ControllerSettings::from_json_file("/nonexistent/stride/settings.json").unwrap_err();
        assert!(matches!(err, StrideError::Io(_)));
    }
}
