use schema::{CreatureDefinition, StatusAilment, TypeTag};
use serde::{Deserialize, Serialize};

/// Maximum HP derived from a creature's base HP stat.
///
/// `floor(2 * base_hp * 50 / 100 + 50 + 10)` — the level-50 stat formula.
/// The source's calculateMaxHP ignores the creature's own level field and
/// always computes at level 50; preserved as observed pending product
/// clarification.
pub fn calculate_max_hp(base_hp: u16) -> u16 {
    (2 * base_hp * 50) / 100 + 50 + 10
}

/// One creature's live battle state, bound to its immutable definition.
/// Owned by the engine for the lifetime of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantState {
    pub definition: CreatureDefinition,
    pub current_hp: u16,
    pub fainted: bool,
    pub ailment: Option<StatusAilment>,
}

impl CombatantState {
    /// Enters battle at full HP with no ailment.
    pub fn new(definition: CreatureDefinition) -> Self {
        let max_hp = calculate_max_hp(definition.base_stats.hp);
        CombatantState {
            definition,
            current_hp: max_hp,
            fainted: false,
            ailment: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn max_hp(&self) -> u16 {
        calculate_max_hp(self.definition.base_stats.hp)
    }

    pub fn types(&self) -> &[TypeTag] {
        &self.definition.types
    }

    pub fn is_fainted(&self) -> bool {
        self.fainted
    }

    /// Subtract damage, flooring HP at 0. Returns true if this faints
    /// the combatant. Fainting clears any active ailment.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        self.current_hp = self.current_hp.saturating_sub(damage);
        if self.current_hp == 0 && !self.fainted {
            self.fainted = true;
            self.ailment = None;
        }
        self.fainted
    }

    /// Apply a freshly rolled ailment. A combatant already afflicted
    /// keeps its current ailment; callers gate on `ailment.is_none()`.
    pub fn inflict(&mut self, ailment: StatusAilment) {
        if self.ailment.is_none() && !self.fainted {
            self.ailment = Some(ailment);
        }
    }
}
