use crate::combatant::CombatantState;
use crate::errors::MalformedCreatureError;
use schema::CreatureDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MAX_ROSTER_SIZE: usize = 6;

/// One side's ordered set of combatants with a single active member.
///
/// Invariant: the active member is never fainted while any able member
/// exists; when every member has fainted the side has lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterState {
    pub trainer_name: String,
    pub members: Vec<CombatantState>,
    pub active_index: usize,
}

impl RosterState {
    /// Build a roster from definitions supplied by the external store.
    /// Every definition is validated here, before a battle can start.
    pub fn new(
        trainer_name: impl Into<String>,
        definitions: Vec<CreatureDefinition>,
    ) -> Result<Self, MalformedCreatureError> {
        if definitions.is_empty() || definitions.len() > MAX_ROSTER_SIZE {
            return Err(MalformedCreatureError::InvalidRosterSize(definitions.len()));
        }
        for definition in &definitions {
            validate_definition(definition)?;
        }

        Ok(RosterState {
            trainer_name: trainer_name.into(),
            members: definitions.into_iter().map(CombatantState::new).collect(),
            active_index: 0,
        })
    }

    /// Parse a roster from the store's JSON array of creature definitions.
    pub fn from_json(
        trainer_name: impl Into<String>,
        json: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let definitions: Vec<CreatureDefinition> = serde_json::from_str(json)?;
        Ok(Self::new(trainer_name, definitions)?)
    }

    pub fn active(&self) -> &CombatantState {
        &self.members[self.active_index]
    }

    pub fn active_mut(&mut self) -> &mut CombatantState {
        &mut self.members[self.active_index]
    }

    /// First non-fainted member other than the active one.
    pub fn first_able_bench(&self) -> Option<usize> {
        self.members
            .iter()
            .enumerate()
            .find(|(i, member)| *i != self.active_index && !member.is_fainted())
            .map(|(i, _)| i)
    }

    pub fn is_wiped(&self) -> bool {
        self.members.iter().all(|member| member.is_fainted())
    }

    /// Make the member at `index` active. The engine validates the index
    /// and faint state before calling this.
    pub fn switch_to(&mut self, index: usize) {
        debug_assert!(index < self.members.len());
        debug_assert!(!self.members[index].is_fainted());
        self.active_index = index;
    }
}

fn validate_definition(definition: &CreatureDefinition) -> Result<(), MalformedCreatureError> {
    let name = &definition.name;

    let type_count = definition.types.len();
    if type_count == 0 || type_count > 2 {
        return Err(MalformedCreatureError::WrongTypeCount {
            name: name.clone(),
            count: type_count,
        });
    }

    if definition.level == 0 || definition.level > 65 {
        return Err(MalformedCreatureError::LevelOutOfRange {
            name: name.clone(),
            level: definition.level,
        });
    }

    if definition.moves.len() != 4 {
        return Err(MalformedCreatureError::WrongMoveCount {
            name: name.clone(),
            count: definition.moves.len(),
        });
    }
    let mut seen = HashSet::new();
    for move_name in &definition.moves {
        if !seen.insert(move_name) {
            return Err(MalformedCreatureError::DuplicateMove {
                name: name.clone(),
                move_name: move_name.clone(),
            });
        }
    }

    let stats = &definition.base_stats;
    let labeled = [
        ("hp", stats.hp),
        ("attack", stats.attack),
        ("defense", stats.defense),
        ("specialAttack", stats.special_attack),
        ("specialDefense", stats.special_defense),
        ("speed", stats.speed),
    ];
    for (stat, value) in labeled {
        if value == 0 || value > 255 {
            return Err(MalformedCreatureError::StatOutOfRange {
                name: name.clone(),
                stat,
                value,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefab_creatures::{emberfox, sprigleaf};

    #[test]
    fn test_roster_rejects_empty_and_oversized() {
        assert_eq!(
            RosterState::new("Ash", vec![]),
            Err(MalformedCreatureError::InvalidRosterSize(0))
        );

        let seven = (0..7).map(|_| emberfox()).collect::<Vec<_>>();
        assert_eq!(
            RosterState::new("Ash", seven),
            Err(MalformedCreatureError::InvalidRosterSize(7))
        );
    }

    #[test]
    fn test_roster_rejects_wrong_move_count() {
        let mut definition = emberfox();
        definition.moves.pop();
        let err = RosterState::new("Ash", vec![definition]).unwrap_err();
        assert!(matches!(
            err,
            MalformedCreatureError::WrongMoveCount { count: 3, .. }
        ));
    }

    #[test]
    fn test_roster_rejects_duplicate_moves() {
        let mut definition = emberfox();
        definition.moves[3] = definition.moves[0].clone();
        let err = RosterState::new("Ash", vec![definition]).unwrap_err();
        assert!(matches!(err, MalformedCreatureError::DuplicateMove { .. }));
    }

    #[test]
    fn test_roster_rejects_bad_type_count_and_level() {
        let mut no_types = emberfox();
        no_types.types.clear();
        assert!(matches!(
            RosterState::new("Ash", vec![no_types]).unwrap_err(),
            MalformedCreatureError::WrongTypeCount { count: 0, .. }
        ));

        let mut too_high = emberfox();
        too_high.level = 66;
        assert!(matches!(
            RosterState::new("Ash", vec![too_high]).unwrap_err(),
            MalformedCreatureError::LevelOutOfRange { level: 66, .. }
        ));
    }

    #[test]
    fn test_roster_rejects_out_of_range_stat() {
        let mut definition = emberfox();
        definition.base_stats.speed = 0;
        assert!(matches!(
            RosterState::new("Ash", vec![definition]).unwrap_err(),
            MalformedCreatureError::StatOutOfRange { stat: "speed", .. }
        ));
    }

    #[test]
    fn test_first_able_bench_skips_fainted() {
        let mut roster =
            RosterState::new("Ash", vec![emberfox(), sprigleaf(), emberfox()]).unwrap();
        roster.members[1].take_damage(u16::MAX);
        assert_eq!(roster.first_able_bench(), Some(2));

        roster.members[2].take_damage(u16::MAX);
        assert_eq!(roster.first_able_bench(), None);
        assert!(!roster.is_wiped());

        roster.members[0].take_damage(u16::MAX);
        assert!(roster.is_wiped());
    }

    #[test]
    fn test_roster_from_json() {
        let json = serde_json::to_string(&vec![emberfox(), sprigleaf()]).unwrap();
        let roster = RosterState::from_json("Misty", &json).unwrap();
        assert_eq!(roster.members.len(), 2);
        assert_eq!(roster.active().name(), "Emberfox");
        assert_eq!(roster.active().current_hp, roster.active().max_hp());
    }
}
