//! Animation Group Tables
//!
//! Maps the controller's state pair onto the name of an animation group.
//!
//! Group names are built from a locomotion base name (`"walkforward"`) plus an
//! equipment suffix (`"1h"`), giving `"walkforward1h"`. Many combinations have
//! no dedicated clip in a given asset set, so [`AnimationGroupTable::resolve`]
//! falls back to the plain base name, and finally to nothing.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::character::collaborators::AnimationPlayer;
use crate::character::state::{EquipmentState, LocomotionState};
use crate::errors::{Result, StrideError};

/// Group name fragments contributed by an equipment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentGroups {
    /// Appended to the plain idle pose.
    pub idle: &'static str,
    /// Appended to every other non-death pose.
    pub movement: &'static str,
    /// Standalone action group (attacks, casting).
    pub action: &'static str,
}

impl EquipmentGroups {
    #[must_use]
    pub const fn new(idle: &'static str, movement: &'static str, action: &'static str) -> Self {
        Self {
            idle,
            movement,
            action,
        }
    }
}

static STANDARD: Lazy<Arc<AnimationGroupTable>> = Lazy::new(|| {
    use EquipmentState as E;
    use LocomotionState as L;

    let locomotion = [
        (L::Idle, "idle"),
        (L::Idle2, "idle2"),
        (L::Idle3, "idle3"),
        (L::Idle4, "idle4"),
        (L::Idle5, "idle5"),
        (L::Idle6, "idle6"),
        (L::Idle7, "idle7"),
        (L::Idle8, "idle8"),
        (L::Idle9, "idle9"),
        (L::IdleSwim, "idleswim"),
        (L::IdleSneak, "idlesneak"),
        (L::WalkForward, "walkforward"),
        (L::WalkBack, "walkback"),
        (L::WalkLeft, "walkleft"),
        (L::WalkRight, "walkright"),
        (L::SwimWalkForward, "swimwalkforward"),
        (L::SwimWalkBack, "swimwalkback"),
        (L::SwimWalkLeft, "swimwalkleft"),
        (L::SwimWalkRight, "swimwalkright"),
        (L::RunForward, "runforward"),
        (L::RunBack, "runback"),
        (L::RunLeft, "runleft"),
        (L::RunRight, "runright"),
        (L::SwimRunForward, "swimrunforward"),
        (L::SwimRunBack, "swimrunback"),
        (L::SwimRunLeft, "swimrunleft"),
        (L::SwimRunRight, "swimrunright"),
        (L::SneakForward, "sneakforward"),
        (L::SneakBack, "sneakback"),
        (L::SneakLeft, "sneakleft"),
        (L::SneakRight, "sneakright"),
        (L::TurnLeft, "turnleft"),
        (L::TurnRight, "turnright"),
        (L::Jump, "jump"),
        // Scripted one-shots replace this group; a refresh during one falls back to idle.
        (L::SpecialIdle, "idle"),
        (L::Death1, "death1"),
        (L::Death2, "death2"),
        (L::Death3, "death3"),
        (L::Death4, "death4"),
        (L::Death5, "death5"),
    ];

    let equipment = [
        (E::HandToHand, EquipmentGroups::new("hh", "hh", "handtohand")),
        (E::OneHand, EquipmentGroups::new("1h", "1h", "weapononehand")),
        (E::TwoHand, EquipmentGroups::new("2c", "2c", "weapontwohand")),
        (E::TwoWide, EquipmentGroups::new("2w", "2w", "weapontwowide")),
        (E::BowAndArrow, EquipmentGroups::new("1h", "1h", "bowandarrow")),
        (E::Crossbow, EquipmentGroups::new("crossbow", "2c", "crossbow")),
        (E::ThrowWeapon, EquipmentGroups::new("1h", "1h", "throwweapon")),
        (E::Spell, EquipmentGroups::new("spell", "", "spellcast")),
    ];

    Arc::new(AnimationGroupTable::new(locomotion, equipment))
});

/// Immutable locomotion and equipment group name tables.
#[derive(Debug, Clone, Default)]
pub struct AnimationGroupTable {
    locomotion: FxHashMap<LocomotionState, &'static str>,
    equipment: FxHashMap<EquipmentState, EquipmentGroups>,
}

impl AnimationGroupTable {
    pub fn new(
        locomotion: impl IntoIterator<Item = (LocomotionState, &'static str)>,
        equipment: impl IntoIterator<Item = (EquipmentState, EquipmentGroups)>,
    ) -> Self {
        Self {
            locomotion: locomotion.into_iter().collect(),
            equipment: equipment.into_iter().collect(),
        }
    }

    /// The built-in table shared by all controllers.
    #[must_use]
    pub fn standard() -> Arc<AnimationGroupTable> {
        Arc::clone(&*STANDARD)
    }

    /// Checks that every locomotion state has a base group name.
    pub fn validate(&self) -> Result<()> {
        match LocomotionState::ALL
            .into_iter()
            .find(|state| !self.locomotion.contains_key(state))
        {
            Some(missing) => Err(StrideError::MissingGroupName(missing)),
            None => Ok(()),
        }
    }

    pub fn base_name(&self, state: LocomotionState) -> Result<&'static str> {
        self.locomotion
            .get(&state)
            .copied()
            .ok_or(StrideError::MissingGroupName(state))
    }

    #[must_use]
    pub fn equipment_groups(&self, state: EquipmentState) -> Option<&EquipmentGroups> {
        self.equipment.get(&state)
    }

    /// Resolves the group to play for a state pair.
    ///
    /// Returns `Ok(None)` when neither the combined nor the base group exists in
    /// `player`; the caller must not start playback in that case.
    pub fn resolve<P>(
        &self,
        locomotion: LocomotionState,
        equipment: EquipmentState,
        player: &P,
    ) -> Result<Option<String>>
    where
        P: AnimationPlayer + ?Sized,
    {
        let base = self.base_name(locomotion)?;

        let mut combined = String::new();
        if !locomotion.is_death() && equipment != EquipmentState::None {
            if let Some(groups) = self.equipment_groups(equipment) {
                let suffix = if locomotion == LocomotionState::Idle {
                    groups.idle
                } else {
                    groups.movement
                };
                combined.reserve(base.len() + suffix.len());
                combined.push_str(base);
                combined.push_str(suffix);
            }
        }

        if !combined.is_empty() && player.has_clip(&combined) {
            return Ok(Some(combined));
        }

        if player.has_clip(base) {
            Ok(Some(base.to_owned()))
        } else {
            log::trace!("No clip for {locomotion:?}/{equipment:?} (base '{base}')");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_complete() {
        assert!(AnimationGroupTable::standard().validate().is_ok());
    }

    #[test]
    fn standard_table_covers_every_wielded_state() {
        let table = AnimationGroupTable::standard();
        for state in EquipmentState::WIELDED {
            assert!(table.equipment_groups(state).is_some(), "{state:?} missing");
        }
        assert!(table.equipment_groups(EquipmentState::None).is_none());
    }

    #[test]
    fn validate_reports_missing_state() {
        let table = AnimationGroupTable::new(
            [(LocomotionState::Idle, "idle")],
            Vec::<(EquipmentState, EquipmentGroups)>::new(),
        );
        let err = table.validate().unwrap_err();
        assert!(matches!(
            err,
            StrideError::MissingGroupName(LocomotionState::Idle2)
        ));
    }

    #[test]
    fn crossbow_idle_and_movement_suffixes_differ() {
        let table = AnimationGroupTable::standard();
        let groups = table.equipment_groups(EquipmentState::Crossbow).unwrap();
        assert_eq!(groups.idle, "crossbow");
        assert_eq!(groups.movement, "2c");
        assert_eq!(groups.action, "crossbow");
    }
}
