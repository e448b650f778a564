//! Character State Enumerations
//!
//! The two orthogonal state axes driven by [`CharacterController`](super::CharacterController):
//!
//! - [`LocomotionState`]: which idle / directional / turn / death pose the entity is in
//! - [`EquipmentState`]: which category of wielded implement colours the pose
//!
//! plus the inventory-side inputs ([`DrawState`], [`ItemCategory`], [`WeaponType`])
//! that the per-frame driver folds into an [`EquipmentState`].

use serde::{Deserialize, Serialize};

// ============================================================================
// Locomotion
// ============================================================================

/// Locomotion pose category. Exactly one is active per controller.
///
/// Death variants are terminal: once entered, the controller stops
/// processing locomotion transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocomotionState {
    Idle,
    Idle2,
    Idle3,
    Idle4,
    Idle5,
    Idle6,
    Idle7,
    Idle8,
    Idle9,
    IdleSwim,
    IdleSneak,

    WalkForward,
    WalkBack,
    WalkLeft,
    WalkRight,

    SwimWalkForward,
    SwimWalkBack,
    SwimWalkLeft,
    SwimWalkRight,

    RunForward,
    RunBack,
    RunLeft,
    RunRight,

    SwimRunForward,
    SwimRunBack,
    SwimRunLeft,
    SwimRunRight,

    SneakForward,
    SneakBack,
    SneakLeft,
    SneakRight,

    TurnLeft,
    TurnRight,

    Jump,

    /// Externally driven one-shot playback (see `play_group`).
    SpecialIdle,

    Death1,
    Death2,
    Death3,
    Death4,
    Death5,
}

impl LocomotionState {
    /// Every variant, in declaration order.
    pub const ALL: [LocomotionState; 40] = [
        Self::Idle,
        Self::Idle2,
        Self::Idle3,
        Self::Idle4,
        Self::Idle5,
        Self::Idle6,
        Self::Idle7,
        Self::Idle8,
        Self::Idle9,
        Self::IdleSwim,
        Self::IdleSneak,
        Self::WalkForward,
        Self::WalkBack,
        Self::WalkLeft,
        Self::WalkRight,
        Self::SwimWalkForward,
        Self::SwimWalkBack,
        Self::SwimWalkLeft,
        Self::SwimWalkRight,
        Self::RunForward,
        Self::RunBack,
        Self::RunLeft,
        Self::RunRight,
        Self::SwimRunForward,
        Self::SwimRunBack,
        Self::SwimRunLeft,
        Self::SwimRunRight,
        Self::SneakForward,
        Self::SneakBack,
        Self::SneakLeft,
        Self::SneakRight,
        Self::TurnLeft,
        Self::TurnRight,
        Self::Jump,
        Self::SpecialIdle,
        Self::Death1,
        Self::Death2,
        Self::Death3,
        Self::Death4,
        Self::Death5,
    ];

    #[inline]
    #[must_use]
    pub fn is_death(self) -> bool {
        matches!(
            self,
            Self::Death1 | Self::Death2 | Self::Death3 | Self::Death4 | Self::Death5
        )
    }

    /// Directional movement pose for the given flags.
    ///
    /// Submersion wins over sneaking, sneaking wins over running.
    #[must_use]
    pub fn moving(direction: Direction, submerged: bool, sneaking: bool, running: bool) -> Self {
        use Direction::{Back, Forward, Left, Right};

        match (submerged, sneaking, running, direction) {
            (true, _, true, Forward) => Self::SwimRunForward,
            (true, _, true, Back) => Self::SwimRunBack,
            (true, _, true, Left) => Self::SwimRunLeft,
            (true, _, true, Right) => Self::SwimRunRight,
            (true, _, false, Forward) => Self::SwimWalkForward,
            (true, _, false, Back) => Self::SwimWalkBack,
            (true, _, false, Left) => Self::SwimWalkLeft,
            (true, _, false, Right) => Self::SwimWalkRight,
            (false, true, _, Forward) => Self::SneakForward,
            (false, true, _, Back) => Self::SneakBack,
            (false, true, _, Left) => Self::SneakLeft,
            (false, true, _, Right) => Self::SneakRight,
            (false, false, true, Forward) => Self::RunForward,
            (false, false, true, Back) => Self::RunBack,
            (false, false, true, Left) => Self::RunLeft,
            (false, false, true, Right) => Self::RunRight,
            (false, false, false, Forward) => Self::WalkForward,
            (false, false, false, Back) => Self::WalkBack,
            (false, false, false, Left) => Self::WalkLeft,
            (false, false, false, Right) => Self::WalkRight,
        }
    }

    /// Resting pose for the given flags.
    #[must_use]
    pub fn resting(submerged: bool, sneaking: bool) -> Self {
        if submerged {
            Self::IdleSwim
        } else if sneaking {
            Self::IdleSneak
        } else {
            Self::Idle
        }
    }
}

/// Planar direction of a moving pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

// ============================================================================
// Equipment
// ============================================================================

/// Category of wielded implement affecting animation selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EquipmentState {
    #[default]
    None,
    HandToHand,
    OneHand,
    TwoHand,
    TwoWide,
    BowAndArrow,
    Crossbow,
    ThrowWeapon,
    Spell,
}

impl EquipmentState {
    /// Every variant except `None`, which carries no group suffix.
    pub const WIELDED: [EquipmentState; 8] = [
        Self::HandToHand,
        Self::OneHand,
        Self::TwoHand,
        Self::TwoWide,
        Self::BowAndArrow,
        Self::Crossbow,
        Self::ThrowWeapon,
        Self::Spell,
    ];

    /// Whether carried weapon meshes should be visible in this state.
    #[inline]
    #[must_use]
    pub fn shows_implements(self) -> bool {
        !matches!(self, Self::None | Self::HandToHand | Self::Spell)
    }

    /// Derives the equipment state from what the actor has drawn and holds.
    ///
    /// `wielded` is only consulted when weapons are drawn.
    #[must_use]
    pub fn derive(draw: DrawState, wielded: Option<ItemCategory>) -> Self {
        match draw {
            DrawState::Nothing => Self::None,
            DrawState::Spell => Self::Spell,
            DrawState::Weapon => match wielded {
                None => Self::HandToHand,
                Some(ItemCategory::Lockpick | ItemCategory::Probe) => Self::OneHand,
                Some(ItemCategory::Weapon(weapon)) => weapon.equipment(),
                Some(ItemCategory::Other) => Self::None,
            },
        }
    }
}

/// What the actor currently has readied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawState {
    #[default]
    Nothing,
    Weapon,
    Spell,
}

/// Category of the item held in the weapon hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Lockpick,
    Probe,
    Weapon(WeaponType),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    ShortBladeOneHand,
    LongBladeOneHand,
    LongBladeTwoHand,
    BluntOneHand,
    BluntTwoClose,
    BluntTwoWide,
    SpearTwoWide,
    AxeOneHand,
    AxeTwoHand,
    MarksmanBow,
    MarksmanCrossbow,
    MarksmanThrown,
    Arrow,
    Bolt,
}

impl WeaponType {
    #[must_use]
    pub fn equipment(self) -> EquipmentState {
        match self {
            Self::ShortBladeOneHand
            | Self::LongBladeOneHand
            | Self::BluntOneHand
            | Self::AxeOneHand
            | Self::Arrow
            | Self::Bolt => EquipmentState::OneHand,
            Self::LongBladeTwoHand | Self::BluntTwoClose | Self::AxeTwoHand => {
                EquipmentState::TwoHand
            }
            Self::BluntTwoWide | Self::SpearTwoWide => EquipmentState::TwoWide,
            Self::MarksmanBow => EquipmentState::BowAndArrow,
            Self::MarksmanCrossbow => EquipmentState::Crossbow,
            Self::MarksmanThrown => EquipmentState::ThrowWeapon,
        }
    }
}

// ============================================================================
// Actor kind
// ============================================================================

/// What sort of world object the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActorKind {
    /// Humanoid with an inventory; equipment state is derived each tick.
    #[default]
    Biped,
    /// Non-humanoid actor; equipment never changes.
    Creature,
    /// Animated non-actor (doors, containers); no root-motion accumulation.
    Object,
}

impl ActorKind {
    #[inline]
    #[must_use]
    pub fn is_actor(self) -> bool {
        !matches!(self, Self::Object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_variant_once() {
        let mut seen = rustc_hash::FxHashSet::default();
        for state in LocomotionState::ALL {
            assert!(seen.insert(state), "{state:?} listed twice");
        }
        assert_eq!(seen.len(), LocomotionState::ALL.len());
    }

    #[test]
    fn death_variants_are_terminal_group() {
        let deaths: Vec<_> = LocomotionState::ALL
            .iter()
            .filter(|s| s.is_death())
            .collect();
        assert_eq!(deaths.len(), 5);
        assert!(!LocomotionState::SpecialIdle.is_death());
    }

    #[test]
    fn submersion_beats_sneak_and_sneak_beats_run() {
        use Direction::*;
        assert_eq!(
            LocomotionState::moving(Left, true, true, true),
            LocomotionState::SwimRunLeft
        );
        assert_eq!(
            LocomotionState::moving(Back, false, true, true),
            LocomotionState::SneakBack
        );
        assert_eq!(
            LocomotionState::moving(Forward, false, false, true),
            LocomotionState::RunForward
        );
        assert_eq!(
            LocomotionState::moving(Right, false, false, false),
            LocomotionState::WalkRight
        );
    }

    #[test]
    fn derive_equipment_from_draw_state() {
        assert_eq!(EquipmentState::derive(DrawState::Nothing, None), EquipmentState::None);
        assert_eq!(EquipmentState::derive(DrawState::Spell, None), EquipmentState::Spell);
        assert_eq!(
            EquipmentState::derive(DrawState::Weapon, None),
            EquipmentState::HandToHand
        );
        assert_eq!(
            EquipmentState::derive(DrawState::Weapon, Some(ItemCategory::Probe)),
            EquipmentState::OneHand
        );
        assert_eq!(
            EquipmentState::derive(
                DrawState::Weapon,
                Some(ItemCategory::Weapon(WeaponType::SpearTwoWide))
            ),
            EquipmentState::TwoWide
        );
        assert_eq!(
            EquipmentState::derive(
                DrawState::Weapon,
                Some(ItemCategory::Weapon(WeaponType::AxeTwoHand))
            ),
            EquipmentState::TwoHand
        );
        // Sheathed ignores whatever is in hand.
        assert_eq!(
            EquipmentState::derive(
                DrawState::Nothing,
                Some(ItemCategory::Weapon(WeaponType::MarksmanBow))
            ),
            EquipmentState::None
        );
    }

    #[test]
    fn implements_hidden_for_empty_hands_and_spells() {
        assert!(!EquipmentState::None.shows_implements());
        assert!(!EquipmentState::HandToHand.shows_implements());
        assert!(!EquipmentState::Spell.shows_implements());
        assert!(EquipmentState::Crossbow.shows_implements());
    }
}
