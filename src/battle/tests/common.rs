use crate::battle::engine::start_battle;
use crate::battle::state::{BattleRules, BattleState, TurnRng};
use crate::roster::RosterState;
use schema::{BaseStats, CreatureDefinition, TypeTag};

/// Builder for test creatures. Defaults to a plain normal-type with
/// flat 50s everywhere so damage numbers stay easy to predict.
pub struct TestCreatureBuilder {
    name: String,
    types: Vec<TypeTag>,
    level: u8,
    stats: BaseStats,
    moves: Vec<String>,
}

impl TestCreatureBuilder {
    pub fn new(name: &str) -> Self {
        TestCreatureBuilder {
            name: name.to_string(),
            types: vec![TypeTag::Normal],
            level: 10,
            stats: BaseStats {
                hp: 50,
                attack: 50,
                defense: 50,
                special_attack: 50,
                special_defense: 50,
                speed: 50,
            },
            moves: vec![
                "Tackle".to_string(),
                "Slam".to_string(),
                "Bite".to_string(),
                "Pound".to_string(),
            ],
        }
    }

    pub fn types(mut self, types: &[TypeTag]) -> Self {
        self.types = types.to_vec();
        self
    }

    pub fn hp(mut self, hp: u16) -> Self {
        self.stats.hp = hp;
        self
    }

    pub fn attack(mut self, attack: u16) -> Self {
        self.stats.attack = attack;
        self
    }

    pub fn defense(mut self, defense: u16) -> Self {
        self.stats.defense = defense;
        self
    }

    pub fn build(self) -> CreatureDefinition {
        CreatureDefinition {
            name: self.name,
            types: self.types,
            level: self.level,
            description: "A creature built for tests.".to_string(),
            base_stats: self.stats,
            abilities: vec!["Run Away".to_string()],
            moves: self.moves,
            color_scheme: vec!["#888888".to_string()],
            height: "0.5m".to_string(),
            weight: "5.0kg".to_string(),
            evolution_chain: None,
        }
    }
}

/// Two-trainer battle under the default rules (swap ends the turn).
pub fn create_test_battle(
    team1: Vec<CreatureDefinition>,
    team2: Vec<CreatureDefinition>,
) -> BattleState {
    create_test_battle_with_rules(team1, team2, BattleRules::default())
}

pub fn create_test_battle_with_rules(
    team1: Vec<CreatureDefinition>,
    team2: Vec<CreatureDefinition>,
    rules: BattleRules,
) -> BattleState {
    let side1 = RosterState::new("Red", team1).expect("side 1 team should be valid");
    let side2 = RosterState::new("Blue", team2).expect("side 2 team should be valid");
    start_battle("test-battle", side1, side2, rules)
}

/// Rolls of 0.5 everywhere: no crits, 0.925 variance, and every ailment
/// infliction roll fails.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![0.5; 20])
}

/// Damage a flat-50 attacker deals to a flat-50 defender with a neutral
/// move under `predictable_rng`: floor((22 * 50 * 50 / (50 * 50)) + 2)
/// scaled by 0.925 variance.
pub const PLAIN_HIT: u16 = 22;
