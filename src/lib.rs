#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod character;
pub mod errors;
pub mod settings;

pub use animation::{AnimationClip, AnimationMixer};
pub use character::{
    ActorKind, AnimationGroupTable, AnimationPlayer, CharacterController, CharacterSystem,
    EquipmentState, LocomotionState, Movement, PlayMode, TickContext,
};
pub use errors::{Result, StrideError};
pub use settings::ControllerSettings;
