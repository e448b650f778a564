//! Character Animation Control
//!
//! This module decides, every simulation tick, which animation group an entity
//! plays and how far it moves:
//!
//! - [`CharacterController`]: per-entity locomotion/equipment state machine and frame driver
//! - [`AnimationGroupTable`]: state pair → group name, with fallback
//! - [`CharacterSystem`]: registry that ticks all controllers
//! - [`collaborators`]: traits for the clip player, world, inventory and stat store
//!
//! # Example
//!
//! ```rust,ignore
//! use stride::character::{ActorKind, CharacterController, TickContext};
//!
//! let mut controller = CharacterController::builder(actor, ActorKind::Biped)
//!     .animation(player)
//!     .build()?;
//!
//! let mut ctx = TickContext::new(&world, &inventory, &mut stats);
//! let movement = controller.update(dt, &mut ctx)?;
//! ```

pub mod collaborators;
pub mod controller;
pub mod groups;
pub mod intent;
pub mod movement;
pub mod queue;
pub mod state;
pub mod system;

pub use collaborators::{
    AccumulationAxes, ActorHandle, AnimationPlayer, Inventory, Priority, Repeat, SkillId,
    SkillStore, SkillUse, Stance, TickContext, WorldQuery,
};
pub use controller::{CharacterController, CharacterControllerBuilder};
pub use groups::{AnimationGroupTable, EquipmentGroups};
pub use intent::{IntentSample, LocomotionRule, select_locomotion};
pub use movement::Movement;
pub use queue::{OneShot, OneShotQueue, PlayMode};
pub use state::{
    ActorKind, Direction, DrawState, EquipmentState, ItemCategory, LocomotionState, WeaponType,
};
pub use system::{CharacterSystem, ControllerHandle};
