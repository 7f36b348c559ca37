use crate::creature_types::TypeTag;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
}

/// A move as the engine sees it during battle.
///
/// In the base system every move is synthesized from the user's primary
/// type with a fixed power of 50, accuracy 95 and physical category; the
/// name is the only part the classification service actually supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleMove {
    pub name: String,
    pub power: u16,
    pub accuracy: u8,
    pub move_type: TypeTag,
    pub category: MoveCategory,
}

impl BattleMove {
    pub const BASE_POWER: u16 = 50;
    pub const BASE_ACCURACY: u8 = 95;

    /// The fixed-profile move every named attack resolves to.
    pub fn basic(name: impl Into<String>, move_type: TypeTag) -> Self {
        BattleMove {
            name: name.into(),
            power: Self::BASE_POWER,
            accuracy: Self::BASE_ACCURACY,
            move_type,
            category: MoveCategory::Physical,
        }
    }
}

/// The five status ailments a move can inflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AilmentKind {
    Burn,
    Poison,
    Paralyze,
    Sleep,
    Freeze,
}

impl fmt::Display for AilmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AilmentKind::Burn => "burn",
            AilmentKind::Poison => "poison",
            AilmentKind::Paralyze => "paralysis",
            AilmentKind::Sleep => "sleep",
            AilmentKind::Freeze => "freeze",
        };
        write!(f, "{}", name)
    }
}

/// An active ailment on a combatant. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusAilment {
    pub kind: AilmentKind,
    pub turns_remaining: u8,
}

impl StatusAilment {
    pub const DURATION: u8 = 3;

    pub fn new(kind: AilmentKind) -> Self {
        StatusAilment {
            kind,
            turns_remaining: Self::DURATION,
        }
    }
}
