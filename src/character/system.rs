//! Controller Registry
//!
//! [`CharacterSystem`] owns one [`CharacterController`] per animated entity and
//! ticks them all with the same [`TickContext`].

use slotmap::{SlotMap, new_key_type};

use crate::character::collaborators::{ActorHandle, AnimationPlayer, TickContext};
use crate::character::controller::CharacterController;
use crate::character::movement::Movement;
use crate::errors::Result;

new_key_type! {
    pub struct ControllerHandle;
}

/// Owns the controllers of every animated entity and ticks them together.
pub struct CharacterSystem<A: AnimationPlayer> {
    controllers: SlotMap<ControllerHandle, CharacterController<A>>,
}

impl<A: AnimationPlayer> CharacterSystem<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            controllers: SlotMap::with_key(),
        }
    }

    /// Registers a controller, returning its handle.
    pub fn insert(&mut self, controller: CharacterController<A>) -> ControllerHandle {
        self.controllers.insert(controller)
    }

    /// Removes a controller when its entity leaves the simulation.
    pub fn remove(&mut self, handle: ControllerHandle) -> Option<CharacterController<A>> {
        let removed = self.controllers.remove(handle);
        if removed.is_none() {
            log::warn!("Attempted to remove an unknown ControllerHandle.");
        }
        removed
    }

    #[must_use]
    pub fn get(&self, handle: ControllerHandle) -> Option<&CharacterController<A>> {
        self.controllers.get(handle)
    }

    pub fn get_mut(&mut self, handle: ControllerHandle) -> Option<&mut CharacterController<A>> {
        self.controllers.get_mut(handle)
    }

    /// Finds the controller bound to `actor`.
    #[must_use]
    pub fn handle_for(&self, actor: ActorHandle) -> Option<ControllerHandle> {
        self.controllers
            .iter()
            .find_map(|(handle, c)| (c.actor() == actor).then_some(handle))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ControllerHandle, &CharacterController<A>)> {
        self.controllers.iter()
    }

    /// Ticks every controller once.
    ///
    /// # Arguments
    /// * `dt` - Delta time per frame (in seconds)
    /// * `ctx` - Shared collaborators for this tick
    ///
    /// Returns the movement produced for each actor.
    pub fn update(&mut self, dt: f32, ctx: &mut TickContext<'_>) -> Result<Vec<(ActorHandle, Movement)>> {
        let mut moved = Vec::with_capacity(self.controllers.len());
        for (_handle, controller) in &mut self.controllers {
            let movement = controller.update(dt, ctx)?;
            moved.push((controller.actor(), movement));
        }
        Ok(moved)
    }
}

impl<A: AnimationPlayer> Default for CharacterSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}
