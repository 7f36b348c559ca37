use crate::creature_types::TypeTag;
use serde::{Deserialize, Serialize};

/// The six base stats the classification service assigns a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

/// One form in a creature's evolution line.
///
/// The engine never reads this; it is carried so the definition the
/// store hands back is the same one the classification service produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionForm {
    pub name: String,
    pub level: u8,
    pub moves: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionChain {
    pub current: EvolutionForm,
    pub next_evolution: Option<EvolutionForm>,
    pub final_evolution: Option<EvolutionForm>,
}

/// A complete creature definition as produced by the external
/// classification step. Immutable once created.
///
/// Invariants (checked by the engine before a battle starts, see
/// `MalformedCreatureError`): 1-2 type tags, level 1-65, exactly 4
/// unique move names, all base stats in 1-255.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureDefinition {
    pub name: String,
    pub types: Vec<TypeTag>,
    pub level: u8,
    pub description: String,
    pub base_stats: BaseStats,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
    pub color_scheme: Vec<String>,
    pub height: String,
    pub weight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolution_chain: Option<EvolutionChain>,
}

impl CreatureDefinition {
    /// The type a basic move inherits: the first entry of the type list.
    pub fn primary_type(&self) -> TypeTag {
        self.types[0]
    }

    pub fn knows_move(&self, move_name: &str) -> bool {
        self.moves.iter().any(|m| m == move_name)
    }
}
