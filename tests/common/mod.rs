//! Recording doubles for the controller's collaborators.

#![allow(dead_code)]

use glam::Vec3;
use rustc_hash::FxHashSet;
use slotmap::SlotMap;

use stride::character::{
    AccumulationAxes, ActorHandle, AnimationPlayer, DrawState, Inventory, ItemCategory, Priority,
    Repeat, SkillId, SkillStore, SkillUse, Stance, WorldQuery,
};

/// One recorded `play` call.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayCall {
    pub name: String,
    pub start: String,
    pub stop: String,
    pub weight: f32,
    pub repeat: Repeat,
}

/// Animation player that records every call.
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    pub clips: FxHashSet<String>,
    /// Clips reported as carrying their own translation.
    pub moving_clips: FxHashSet<String>,
    pub plays: Vec<PlayCall>,
    pub advances: Vec<f32>,
    pub speeds: Vec<f32>,
    pub accumulation: Option<AccumulationAxes>,
    pub implements_visible: Vec<bool>,
    /// Root motion returned by every `advance`.
    pub root_motion: Vec3,
    pub playing: bool,
}

impl RecordingPlayer {
    pub fn with_clips(names: &[&str]) -> Self {
        Self {
            clips: names.iter().map(|s| (*s).to_owned()).collect(),
            ..Default::default()
        }
    }

    pub fn moving(mut self, names: &[&str]) -> Self {
        for name in names {
            self.clips.insert((*name).to_owned());
            self.moving_clips.insert((*name).to_owned());
        }
        self
    }

    pub fn last_played(&self) -> Option<&str> {
        self.plays.last().map(|p| p.name.as_str())
    }

    pub fn played_names(&self) -> Vec<&str> {
        self.plays.iter().map(|p| p.name.as_str()).collect()
    }
}

impl AnimationPlayer for RecordingPlayer {
    fn has_clip(&self, name: &str) -> bool {
        self.clips.contains(name)
    }

    fn play(
        &mut self,
        name: &str,
        _priority: Priority,
        start: &str,
        stop: &str,
        weight: f32,
        repeat: Repeat,
    ) -> bool {
        self.plays.push(PlayCall {
            name: name.to_owned(),
            start: start.to_owned(),
            stop: stop.to_owned(),
            weight,
            repeat,
        });
        self.moving_clips.contains(name)
    }

    fn advance(&mut self, dt: f32) -> Vec3 {
        self.advances.push(dt);
        self.root_motion
    }

    fn set_speed(&mut self, speed: f32) {
        self.speeds.push(speed);
    }

    fn set_accumulation(&mut self, axes: AccumulationAxes) {
        self.accumulation = Some(axes);
    }

    fn show_carried_implements(&mut self, visible: bool) {
        self.implements_visible.push(visible);
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// World state for a single actor.
#[derive(Debug, Clone)]
pub struct TestWorld {
    pub on_ground: bool,
    pub submerged: bool,
    pub running: bool,
    pub sneaking: bool,
    pub movement: Vec3,
    pub rotation: Vec3,
    pub speed: f32,
    pub jump_height: f32,
    pub player: Option<ActorHandle>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self {
            on_ground: true,
            submerged: false,
            running: false,
            sneaking: false,
            movement: Vec3::ZERO,
            rotation: Vec3::ZERO,
            speed: 0.0,
            jump_height: 0.0,
            player: None,
        }
    }
}

impl WorldQuery for TestWorld {
    fn is_on_ground(&self, _actor: ActorHandle) -> bool {
        self.on_ground
    }

    fn is_submerged(&self, _actor: ActorHandle) -> bool {
        self.submerged
    }

    fn stance(&self, _actor: ActorHandle, stance: Stance) -> bool {
        match stance {
            Stance::Run => self.running,
            Stance::Sneak => self.sneaking,
        }
    }

    fn movement_intent(&self, _actor: ActorHandle) -> Vec3 {
        self.movement
    }

    fn rotation_intent(&self, _actor: ActorHandle) -> Vec3 {
        self.rotation
    }

    fn speed(&self, _actor: ActorHandle) -> f32 {
        self.speed
    }

    fn jump_height(&self, _actor: ActorHandle) -> f32 {
        self.jump_height
    }

    fn is_player(&self, actor: ActorHandle) -> bool {
        self.player == Some(actor)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestInventory {
    pub draw: DrawState,
    pub wielded: Option<ItemCategory>,
}

impl Inventory for TestInventory {
    fn draw_state(&self, _actor: ActorHandle) -> DrawState {
        self.draw
    }

    fn wielded_item(&self, _actor: ActorHandle) -> Option<ItemCategory> {
        self.wielded
    }
}

#[derive(Debug, Default)]
pub struct SkillLog {
    pub uses: Vec<(ActorHandle, SkillId, SkillUse)>,
}

impl SkillLog {
    pub fn count(&self, usage: SkillUse) -> usize {
        self.uses.iter().filter(|(_, _, u)| *u == usage).count()
    }
}

impl SkillStore for SkillLog {
    fn record_skill_progress(&mut self, actor: ActorHandle, skill: SkillId, usage: SkillUse) {
        self.uses.push((actor, skill, usage));
    }
}

/// Routes crate logs to the test harness; `RUST_LOG=stride=trace` to see them.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Mints distinct actor handles.
pub fn actors(n: usize) -> Vec<ActorHandle> {
    let mut map: SlotMap<ActorHandle, ()> = SlotMap::with_key();
    (0..n).map(|_| map.insert(())).collect()
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}
